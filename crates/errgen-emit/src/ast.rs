/// A literal value embedded verbatim in generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    Int(i128),
    /// A `&[(&str, &str)]` slice literal.
    Pairs(Vec<(String, String)>),
}

impl Literal {
    /// Rust source text for this literal.
    pub fn to_source(&self) -> String {
        match self {
            Literal::Str(s) => str_literal(s),
            Literal::Int(n) => n.to_string(),
            Literal::Pairs(pairs) if pairs.is_empty() => "&[]".to_string(),
            Literal::Pairs(pairs) => {
                let mut out = String::from("&[\n");
                for (k, v) in pairs {
                    out.push_str(&format!("    ({}, {}),\n", str_literal(k), str_literal(v)));
                }
                out.push(']');
                out
            }
        }
    }
}

/// Quote a string as a Rust string literal.
pub fn str_literal(s: &str) -> String {
    // str's Debug form escapes exactly what a Rust literal needs.
    format!("{:?}", s)
}

/// `const` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    pub name: String,
    pub ty: String,
    pub value: Literal,
    pub public: bool,
    pub doc: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: Literal) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value,
            public: false,
            doc: None,
        }
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Free function declaration with a literal body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub params: Vec<(String, String)>,
    pub ret: Option<String>,
    /// Body statements, one per line, without the outer indentation.
    pub body: Vec<String>,
    pub public: bool,
    pub doc: Option<String>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            ret: None,
            body: Vec::new(),
            public: false,
            doc: None,
        }
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push((name.into(), ty.into()));
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.ret = Some(ty.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

/// Top-level item of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Const(Const),
    Function(Function),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Const(c) => &c.name,
            Item::Function(f) => &f.name,
        }
    }
}
