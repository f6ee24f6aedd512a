//! Builder class text emission
//!
//! The layout is fixed: fields, constructor, `Empty` factory, one fluent
//! setter per property, then `Build()`. Output is a pure function of the
//! spec, byte-identical across runs and environments.

use crate::features::rendering::domain::BuilderSpec;
use crate::shared::utils::text::to_title_case;

/// Render the complete source text of the builder class described by `spec`.
///
/// Lines are newline-joined with a single trailing newline. The initializer
/// lines inside `Build()` keep the double space before `=` and the trailing
/// comma after the last entry; C# object initializers accept the trailing
/// separator.
pub fn render_builder_class(spec: &BuilderSpec) -> String {
    let class_name = spec.builder_class_name();
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("public class {}", class_name));
    lines.push("{".to_string());

    match &spec.properties {
        Some(properties) => {
            // Private backing fields
            for property in properties {
                lines.push(format!(
                    "    private {} _{};",
                    property.declared_type, property.name
                ));
            }
            lines.push(String::new());

            // No-argument constructor
            lines.push(format!("    public {}()", class_name));
            lines.push("    {".to_string());
            lines.push("    }".to_string());
            lines.push(String::new());

            // Static factory accessor
            lines.push(format!("    public static {} Empty => new();", class_name));
            lines.push(String::new());

            // Fluent setters
            for property in properties {
                lines.push(format!(
                    "    public {} {}({} {})",
                    class_name,
                    to_title_case(&property.name),
                    property.declared_type,
                    property.name
                ));
                lines.push("    {".to_string());
                lines.push(format!("        _{} = {};", property.name, property.name));
                lines.push("        return this;".to_string());
                lines.push("    }".to_string());
                lines.push(String::new());
            }

            // Build method
            lines.push(format!("    public {} Build()", spec.target_class_name));
            lines.push("    {".to_string());
            lines.push(format!("        return new {}", spec.target_class_name));
            lines.push("        {".to_string());
            for property in properties {
                lines.push(format!(
                    "            {}  = _{},",
                    to_title_case(&property.name),
                    property.name
                ));
            }
            lines.push("        };".to_string());
            lines.push("    }".to_string());
        }
        None => {
            lines.push(format!(
                "    // Type {} was not found. Check the class name and try again.",
                spec.target_class_name
            ));
        }
    }

    lines.push("}".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
