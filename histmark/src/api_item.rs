//! API descriptors rendered into README code samples
//!
//! The README documents types and functions through plain descriptions read
//! from configuration: names, parameters, return types and doc text. This
//! module turns them into illustrative Rust outlines.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiParam {
    /// Parameter name
    pub name: String,

    /// Parameter type as written in source
    #[serde(rename = "type")]
    pub ty: String,

    /// Suggested value, shown as a comment after the parameter
    #[serde(default)]
    pub default: Option<String>,
}

impl ApiParam {
    fn render(&self) -> String {
        match &self.default {
            Some(default) => format!("{}: {} /* = {} */", self.name, self.ty, default),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// A free function or method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFunction {
    /// Function name
    pub name: String,

    /// Receiver for methods, e.g. `&mut self`
    #[serde(default)]
    pub receiver: Option<String>,

    /// Declared parameters after the receiver
    #[serde(default)]
    pub params: Vec<ApiParam>,

    /// Return type, omitted for `()`
    #[serde(default)]
    pub returns: Option<String>,

    /// Documentation text
    #[serde(default)]
    pub doc: Option<String>,
}

impl ApiFunction {
    /// Render the `pub fn` signature line
    pub fn signature(&self) -> String {
        format!("pub {}", self.bare_signature())
    }

    fn bare_signature(&self) -> String {
        let args = self
            .receiver
            .iter()
            .cloned()
            .chain(self.params.iter().map(ApiParam::render))
            .join(", ");
        let returns = self
            .returns
            .as_ref()
            .map(|ty| format!(" -> {}", ty))
            .unwrap_or_default();
        format!("fn {}({}){}", self.name, args, returns)
    }

    /// Render the signature with a placeholder body
    pub fn render_outline(&self) -> String {
        format!("{} {{ ... }}", self.signature())
    }

    fn push_member(&self, lines: &mut Vec<String>, public: bool) {
        if let Some(doc) = &self.doc {
            lines.extend(doc.lines().map(|line| format!("    /// {}", line)));
        }
        let signature = if public {
            self.signature()
        } else {
            self.bare_signature()
        };
        lines.push(format!("    {} {{ ... }}", signature));
    }
}

/// Whether a documented type is a struct or a trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Struct,
    Trait,
}

/// A documented type together with its public methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiType {
    /// Type name
    pub name: String,

    #[serde(default)]
    pub kind: TypeKind,

    /// Generic parameters including brackets, e.g. `<T>`
    #[serde(default)]
    pub generics: Option<String>,

    /// Bounded generics for the impl block, e.g. `<T: Clone>`
    #[serde(default)]
    pub bounds: Option<String>,

    /// One-line summary, rendered in bold
    #[serde(default)]
    pub doc: Option<String>,

    /// Longer description rendered under the summary
    #[serde(default)]
    pub description: Option<String>,

    /// Derived traits listed above the struct
    #[serde(default)]
    pub derives: Vec<String>,

    /// Constructor, listed first in the impl block
    #[serde(default)]
    pub constructor: Option<ApiFunction>,

    #[serde(default)]
    pub methods: Vec<ApiFunction>,
}

impl ApiType {
    /// Render the type as a Rust outline: declaration plus member signatures
    pub fn render_outline(&self) -> String {
        let generics = self.generics.as_deref().unwrap_or("");
        let mut lines = Vec::new();

        match self.kind {
            TypeKind::Struct => {
                if !self.derives.is_empty() {
                    lines.push(format!("#[derive({})]", self.derives.join(", ")));
                }
                lines.push(format!("pub struct {}{} {{ .. }}", self.name, generics));
                lines.push(String::new());

                let impl_generics = self.bounds.as_deref().unwrap_or(generics);
                lines.push(format!("impl{} {}{} {{", impl_generics, self.name, generics));
                for function in self.constructor.iter().chain(&self.methods) {
                    function.push_member(&mut lines, true);
                }
            }
            TypeKind::Trait => {
                lines.push(format!("pub trait {}{} {{", self.name, generics));
                for function in self.constructor.iter().chain(&self.methods) {
                    function.push_member(&mut lines, false);
                }
            }
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undo() -> ApiFunction {
        ApiFunction {
            name: "undo".to_string(),
            receiver: Some("&mut self".to_string()),
            params: Vec::new(),
            returns: Some("Option<&T>".to_string()),
            doc: Some("Move one state back".to_string()),
        }
    }

    #[test]
    fn test_signature_with_params_and_defaults() {
        let function = ApiFunction {
            name: "with_limit".to_string(),
            receiver: None,
            params: vec![
                ApiParam {
                    name: "initial".to_string(),
                    ty: "T".to_string(),
                    default: None,
                },
                ApiParam {
                    name: "limit".to_string(),
                    ty: "usize".to_string(),
                    default: Some("100".to_string()),
                },
            ],
            returns: Some("Self".to_string()),
            doc: None,
        };

        assert_eq!(
            function.signature(),
            "pub fn with_limit(initial: T, limit: usize /* = 100 */) -> Self"
        );
    }

    #[test]
    fn test_signature_with_receiver() {
        assert_eq!(undo().signature(), "pub fn undo(&mut self) -> Option<&T>");
        assert_eq!(
            undo().render_outline(),
            "pub fn undo(&mut self) -> Option<&T> { ... }"
        );
    }

    #[test]
    fn test_struct_outline() {
        let ty = ApiType {
            name: "History".to_string(),
            kind: TypeKind::Struct,
            generics: Some("<T>".to_string()),
            bounds: None,
            doc: None,
            description: None,
            derives: vec!["Debug".to_string(), "Clone".to_string()],
            constructor: Some(ApiFunction {
                name: "new".to_string(),
                receiver: None,
                params: vec![ApiParam {
                    name: "initial".to_string(),
                    ty: "T".to_string(),
                    default: None,
                }],
                returns: Some("Self".to_string()),
                doc: None,
            }),
            methods: vec![undo()],
        };

        assert_eq!(
            ty.render_outline(),
            "#[derive(Debug, Clone)]\n\
             pub struct History<T> { .. }\n\
             \n\
             impl<T> History<T> {\n    \
             pub fn new(initial: T) -> Self { ... }\n    \
             /// Move one state back\n    \
             pub fn undo(&mut self) -> Option<&T> { ... }\n\
             }"
        );
    }

    #[test]
    fn test_trait_outline_omits_visibility() {
        let ty = ApiType {
            name: "Historic".to_string(),
            kind: TypeKind::Trait,
            generics: None,
            bounds: None,
            doc: None,
            description: None,
            derives: Vec::new(),
            constructor: None,
            methods: vec![ApiFunction {
                name: "step_back".to_string(),
                receiver: Some("&mut self".to_string()),
                params: Vec::new(),
                returns: Some("bool".to_string()),
                doc: None,
            }],
        };

        assert_eq!(
            ty.render_outline(),
            "pub trait Historic {\n    fn step_back(&mut self) -> bool { ... }\n}"
        );
    }

    #[test]
    fn test_parse_from_toml() {
        let ty: ApiType = toml::from_str(
            r#"
name = "Historic"
kind = "trait"

[[methods]]
name = "load"
receiver = "&mut self"
params = [{ name = "state", type = "Self::State" }]
"#,
        )
        .unwrap();

        assert_eq!(ty.kind, TypeKind::Trait);
        assert_eq!(ty.methods[0].params[0].ty, "Self::State");
    }
}
