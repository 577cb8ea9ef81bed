//! Visual Basic emitter.

use super::{qualify, EmitOptions, Emitter, TargetLanguage};
use xamlc_core::{Construct, Literal, TypeName};

const GLOBAL_PREFIX: &str = "Global.";

/// Renders expressions as Visual Basic.
#[derive(Debug, Clone, Default)]
pub struct VisualBasicEmitter {
    options: EmitOptions,
}

impl VisualBasicEmitter {
    /// Create a new Visual Basic emitter.
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }
}

impl Emitter for VisualBasicEmitter {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::VisualBasic
    }

    fn options(&self) -> &EmitOptions {
        &self.options
    }

    fn type_name(&self, name: &TypeName) -> String {
        qualify(name, GLOBAL_PREFIX, self.options.qualify_global_names)
    }

    fn construct(&self, construct: &Construct) -> String {
        let mut code = format!(
            "New {}({})",
            self.type_name(&construct.type_name),
            self.arguments(&construct.args)
        );

        if !construct.initializers.is_empty() {
            let assignments = construct
                .initializers
                .iter()
                .map(|(property, value)| format!(".{} = {}", property, self.emit(value)))
                .collect::<Vec<_>>()
                .join(", ");
            code.push_str(&format!(" With {{{}}}", assignments));
        } else if !construct.items.is_empty() {
            code.push_str(&format!(" From {{{}}}", self.arguments(&construct.items)));
        }

        code
    }

    fn literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Raw(token) => token.clone(),
            Literal::Byte(value) => format!("CByte({})", value),
            Literal::Float(value) => format!("{}F", value),
            Literal::Double(digits) => format!("{}R", digits),
            Literal::Long(value) => format!("{}L", value),
            Literal::Str(value) => self.string_literal(value),
        }
    }

    fn string_literal(&self, value: &str) -> String {
        format!("\"{}\"", value.replace('"', "\"\""))
    }

    fn null(&self) -> &'static str {
        "Nothing"
    }

    fn fallback(&self, target: &TypeName, source: &str) -> String {
        let target = self.type_name(target);
        format!(
            "CType({}.ConvertFromInvariantString(GetType({}), {}), {})",
            self.type_name(&self.options.fallback_converter),
            target,
            self.string_literal(source),
            target
        )
    }
}
