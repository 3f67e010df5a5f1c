use std::io;

use minijinja::Environment;
use serde::Serialize;

use super::model::{AssertionKind, AssertorFile};

const ASSERTOR_FILE_TEMPLATE: &str = include_str!("../../templates/assertor_file.go.txt");
const ASSERTOR_TYPE_TEMPLATE: &str = include_str!("../../templates/assertor_type.go.txt");
const STRING_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_string.go.txt");
const STRING_PTR_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_string_ptr.go.txt");
const INT_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_int.go.txt");
const INT_PTR_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_int_ptr.go.txt");
const FLOAT_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_float.go.txt");
const FLOAT_PTR_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_float_ptr.go.txt");
const NUMBER_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_number.go.txt");
const NUMBER_PTR_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_number_ptr.go.txt");
const VALUE_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_value.go.txt");
const IP_ASSERTION_TEMPLATE: &str = include_str!("../../templates/assert_ip.go.txt");

/// Bool fields are declared-for but generate no validation method.
const NONE_ASSERTION_TEMPLATE: &str = "";

/// Renders an [`AssertorFile`] to generated Go source.
///
/// The template registry is built once in [`Renderer::new`] and owned by
/// the renderer; there is no process-global template state. Rendering is a
/// pure function of the input record, so rendering the same file twice
/// produces byte-identical output. A known assertion kind without a
/// registered template panics: the kind enumeration and the template table
/// are kept in lockstep, and a gap is a bug here, not bad input.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Renderer {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_filter("quote", |value: String| format!("{value:?}"));
        let templates = [
            ("assertor_file", ASSERTOR_FILE_TEMPLATE),
            ("assertor_type", ASSERTOR_TYPE_TEMPLATE),
            (AssertionKind::Bool.template_name(), NONE_ASSERTION_TEMPLATE),
            (
                AssertionKind::String.template_name(),
                STRING_ASSERTION_TEMPLATE,
            ),
            (
                AssertionKind::StringPtr.template_name(),
                STRING_PTR_ASSERTION_TEMPLATE,
            ),
            (AssertionKind::Int.template_name(), INT_ASSERTION_TEMPLATE),
            (
                AssertionKind::IntPtr.template_name(),
                INT_PTR_ASSERTION_TEMPLATE,
            ),
            (
                AssertionKind::Float.template_name(),
                FLOAT_ASSERTION_TEMPLATE,
            ),
            (
                AssertionKind::FloatPtr.template_name(),
                FLOAT_PTR_ASSERTION_TEMPLATE,
            ),
            (
                AssertionKind::Number.template_name(),
                NUMBER_ASSERTION_TEMPLATE,
            ),
            (
                AssertionKind::NumberPtr.template_name(),
                NUMBER_PTR_ASSERTION_TEMPLATE,
            ),
            (
                AssertionKind::Value.template_name(),
                VALUE_ASSERTION_TEMPLATE,
            ),
            (AssertionKind::Ip.template_name(), IP_ASSERTION_TEMPLATE),
        ];
        for (name, source) in templates {
            env.add_template(name, source)
                .expect("built-in template must parse");
        }
        Renderer { env }
    }

    /// Render the whole generated file: package clause and import block,
    /// then per type its definition and accessor, then per assertion its
    /// kind-selected method. Skipped assertions render nothing.
    pub fn render(&self, file: &AssertorFile) -> String {
        let mut out = String::new();
        out.push_str(&self.render_template("assertor_file", file));
        for ty in &file.types {
            out.push_str(&self.render_template("assertor_type", ty));
            for assertion in &ty.assertions {
                if assertion.skipped {
                    continue;
                }
                out.push_str(&self.render_template(assertion.kind.template_name(), assertion));
            }
        }
        out
    }

    /// Render into a byte sink. The file is rendered completely before the
    /// first byte is written, so a sink never observes partial output.
    pub fn write<W: io::Write>(&self, file: &AssertorFile, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render(file).as_bytes())
    }

    fn render_template<S: Serialize>(&self, name: &str, ctx: &S) -> String {
        let template = self
            .env
            .get_template(name)
            .unwrap_or_else(|_| panic!("unknown template {name:?}"));
        template
            .render(ctx)
            .unwrap_or_else(|err| panic!("template {name:?} failed to render: {err}"))
    }

    #[cfg(test)]
    pub(crate) fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}
