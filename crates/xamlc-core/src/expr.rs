//! Language-neutral description of the value a converter wants to construct.
//!
//! Converters never produce source text. They return an [`Expr`] tree and the
//! active emitter decides how each node is spelled in the target language.

use std::fmt;

/// A fully-qualified type name such as `System.Windows.Media.Color`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeName(pub String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        TypeName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last dotted segment (`Color` for `System.Windows.Media.Color`).
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        TypeName(s.to_string())
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        TypeName(s)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The semantic result of a conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Constructor call, optionally with named initializers or collection items.
    New(Construct),
    /// Static member access: `Owner.Member`.
    Member { owner: TypeName, member: String },
    /// Static factory call: `Owner.Method(args)`.
    Invoke {
        owner: TypeName,
        method: String,
        args: Vec<Expr>,
    },
    /// A literal value.
    Literal(Literal),
    /// The "no value" expression.
    Null,
    /// Delegate to the runtime's invariant-string converter for `target`.
    Fallback { target: TypeName, source: String },
}

impl Expr {
    /// `new T()`.
    pub fn new_default(type_name: TypeName) -> Self {
        Expr::New(Construct::new(type_name))
    }

    /// `new T(args...)`.
    pub fn construct(type_name: TypeName, args: Vec<Expr>) -> Self {
        Expr::New(Construct::new(type_name).with_args(args))
    }

    pub fn member(owner: TypeName, member: impl Into<String>) -> Self {
        Expr::Member {
            owner,
            member: member.into(),
        }
    }

    pub fn invoke(owner: TypeName, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Invoke {
            owner,
            method: method.into(),
            args,
        }
    }

    /// A numeric source token copied verbatim into the generated code.
    pub fn raw(token: impl Into<String>) -> Self {
        Expr::Literal(Literal::Raw(token.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::Str(value.into()))
    }

    pub fn fallback(target: TypeName, source: impl Into<String>) -> Self {
        Expr::Fallback {
            target,
            source: source.into(),
        }
    }

    pub fn as_construct(&self) -> Option<&Construct> {
        match self {
            Expr::New(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expr::Literal(l) => Some(l),
            _ => None,
        }
    }
}

/// A constructor call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Construct {
    pub type_name: TypeName,
    /// Positional constructor arguments.
    pub args: Vec<Expr>,
    /// Named property initializers, in emission order.
    pub initializers: Vec<(String, Expr)>,
    /// Collection initializer items.
    pub items: Vec<Expr>,
}

impl Construct {
    pub fn new(type_name: TypeName) -> Self {
        Self {
            type_name,
            args: Vec::new(),
            initializers: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<Expr>) -> Self {
        self.args = args;
        self
    }

    pub fn with_initializer(mut self, property: impl Into<String>, value: Expr) -> Self {
        self.initializers.push((property.into(), value));
        self
    }

    pub fn with_items(mut self, items: Vec<Expr>) -> Self {
        self.items = items;
        self
    }
}

/// Literal values. Typed variants carry the target-language suffix or cast.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// Source token emitted exactly as authored.
    Raw(String),
    Byte(u8),
    Float(f32),
    /// Double literal whose digits are kept as text.
    Double(String),
    Long(i64),
    /// String literal; escaping is the emitter's job.
    Str(String),
}

impl Literal {
    /// The digits of a numeric literal, without any suffix.
    pub fn numeric_text(&self) -> Option<String> {
        match self {
            Literal::Raw(s) | Literal::Double(s) => Some(s.clone()),
            Literal::Byte(b) => Some(b.to_string()),
            Literal::Float(f) => Some(f.to_string()),
            Literal::Long(l) => Some(l.to_string()),
            Literal::Str(_) => None,
        }
    }
}
