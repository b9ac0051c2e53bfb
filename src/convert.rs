use serde::Serialize;

use crate::error::JsonTidyError;
use crate::scanner::reformat;

/// Renders any serializable value as indented JSON text.
///
/// The value is serialized compactly with `serde_json` and the result is
/// run through [`reformat`], so the output layout is identical to
/// reindenting the equivalent JSON text.
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Player {
///     name: String,
///     scores: Vec<u32>,
/// }
///
/// let player = Player { name: "Alice".into(), scores: vec![95, 87] };
/// let output = jsontidy::to_string_pretty(&player).unwrap();
/// assert_eq!(
///     output,
///     "{\n    \"name\": \"Alice\",\n    \"scores\": [\n        95,\n        87\n    ]\n}"
/// );
/// ```
pub fn to_string_pretty<T>(value: &T) -> Result<String, JsonTidyError>
where
    T: Serialize + ?Sized,
{
    let compact = serde_json::to_string(value)?;
    reformat(&compact)
}
