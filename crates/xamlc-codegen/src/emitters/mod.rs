//! Emitters for the supported target languages.

#[cfg(feature = "csharp")]
mod csharp;
#[cfg(feature = "visual-basic")]
mod visual_basic;

#[cfg(feature = "csharp")]
pub use csharp::CSharpEmitter;
#[cfg(feature = "visual-basic")]
pub use visual_basic::VisualBasicEmitter;

use serde::{Deserialize, Serialize};
use xamlc_core::{names, Construct, Expr, Literal, TypeName};

/// Language of the generated code-behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    #[serde(rename = "csharp", alias = "cs")]
    CSharp,
    #[serde(rename = "visual-basic", alias = "vb")]
    VisualBasic,
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CSharp => write!(f, "C#"),
            Self::VisualBasic => write!(f, "Visual Basic"),
        }
    }
}

/// Options shared by every emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Prefix type names with the language's global namespace alias.
    pub qualify_global_names: bool,
    /// Type exposing `ConvertFromInvariantString(Type, string)`.
    pub fallback_converter: TypeName,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            qualify_global_names: true,
            fallback_converter: TypeName::from(names::TYPE_FROM_STRING_CONVERTERS),
        }
    }
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_global_names(mut self, qualify: bool) -> Self {
        self.qualify_global_names = qualify;
        self
    }

    pub fn with_fallback_converter(mut self, name: impl Into<TypeName>) -> Self {
        self.fallback_converter = name.into();
        self
    }
}

/// Renders [`Expr`] trees as source text in one target language.
pub trait Emitter: Send + Sync {
    /// Target language.
    fn language(&self) -> TargetLanguage;

    /// Options this emitter was built with.
    fn options(&self) -> &EmitOptions;

    /// Type name as it appears in generated code.
    fn type_name(&self, name: &TypeName) -> String;

    /// Constructor call, including any initializers or collection items.
    fn construct(&self, construct: &Construct) -> String;

    /// Typed literal.
    fn literal(&self, literal: &Literal) -> String;

    /// String literal with the language's escaping rules.
    fn string_literal(&self, value: &str) -> String;

    /// The null keyword.
    fn null(&self) -> &'static str;

    /// Call into the runtime's invariant-string converter.
    fn fallback(&self, target: &TypeName, source: &str) -> String;

    /// Static member access.
    fn member(&self, owner: &TypeName, member: &str) -> String {
        format!("{}.{}", self.type_name(owner), member)
    }

    /// Static factory call.
    fn invoke(&self, owner: &TypeName, method: &str, args: &[Expr]) -> String {
        format!("{}.{}({})", self.type_name(owner), method, self.arguments(args))
    }

    /// Comma separated rendering of `args`.
    fn arguments(&self, args: &[Expr]) -> String {
        args.iter()
            .map(|arg| self.emit(arg))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render a whole expression tree.
    fn emit(&self, expr: &Expr) -> String {
        match expr {
            Expr::New(construct) => self.construct(construct),
            Expr::Member { owner, member } => self.member(owner, member),
            Expr::Invoke {
                owner,
                method,
                args,
            } => self.invoke(owner, method, args),
            Expr::Literal(Literal::Str(value)) => self.string_literal(value),
            Expr::Literal(literal) => self.literal(literal),
            Expr::Null => self.null().to_string(),
            Expr::Fallback { target, source } => self.fallback(target, source),
        }
    }
}

/// Prepend `prefix` unless the name already carries it.
pub(crate) fn qualify(name: &TypeName, prefix: &str, enabled: bool) -> String {
    let name = name.as_str();
    if enabled && !name.starts_with(prefix) {
        format!("{prefix}{name}")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify() {
        let name = TypeName::from("System.Windows.Point");
        assert_eq!(qualify(&name, "global::", false), "System.Windows.Point");
        assert_eq!(qualify(&name, "global::", true), "global::System.Windows.Point");

        let already = TypeName::from("global::System.Windows.Point");
        assert_eq!(qualify(&already, "global::", true), "global::System.Windows.Point");
    }

    #[test]
    fn test_options_qualify_by_default() {
        assert!(EmitOptions::default().qualify_global_names);
        assert!(!EmitOptions::new().with_global_names(false).qualify_global_names);
    }

    #[test]
    fn test_target_language_names() {
        assert_eq!(TargetLanguage::default(), TargetLanguage::CSharp);
        assert_eq!(TargetLanguage::VisualBasic.to_string(), "Visual Basic");
    }
}
