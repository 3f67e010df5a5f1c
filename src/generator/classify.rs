use super::model::AssertionKind;

/// Map candidate type signatures to an assertion kind.
///
/// Signatures are tested in the order given (literal text before resolved
/// and underlying forms), against a fixed table; the first match wins and
/// anything unmatched is a [`AssertionKind::Value`]. Exact matches only —
/// no partial matching, no case folding. `ptr` says whether the field was
/// reached through at least one pointer indirection; `bool` and `net.IP`
/// ignore it.
pub fn classify(signatures: &[String], ptr: bool) -> AssertionKind {
    for signature in signatures {
        match signature.as_str() {
            "encoding/json.Number" => {
                return if ptr {
                    AssertionKind::NumberPtr
                } else {
                    AssertionKind::Number
                }
            }
            "net.IP" => return AssertionKind::Ip,
            "string" => {
                return if ptr {
                    AssertionKind::StringPtr
                } else {
                    AssertionKind::String
                }
            }
            "int" | "int8" | "int16" | "int32" | "int64" => {
                return if ptr {
                    AssertionKind::IntPtr
                } else {
                    AssertionKind::Int
                }
            }
            "float32" | "float64" => {
                return if ptr {
                    AssertionKind::FloatPtr
                } else {
                    AssertionKind::Float
                }
            }
            "bool" => return AssertionKind::Bool,
            _ => {}
        }
    }
    AssertionKind::Value
}
