use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::Value;

use crate::error::ApiError;
use crate::model::WeatherRecord;

const ROOT: &str = "weather";

/// Serialize a weather record as a flat XML document.
///
/// One child element per field, tag = field name, text = the field's
/// stringified value. Nested values are flattened to their JSON text rather
/// than expanded into nested elements; existing consumers depend on that
/// shape. Child order follows the record's iteration order.
pub fn to_xml(record: &WeatherRecord) -> Result<Vec<u8>, ApiError> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(internal)?;
    writer.write_event(Event::Start(BytesStart::new(ROOT))).map_err(internal)?;

    for (key, value) in record {
        writer.write_event(Event::Start(BytesStart::new(key.as_str()))).map_err(internal)?;
        writer.write_event(Event::Text(BytesText::new(&value_text(value)))).map_err(internal)?;
        writer.write_event(Event::End(BytesEnd::new(key.as_str()))).map_err(internal)?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT))).map_err(internal)?;

    Ok(writer.into_inner())
}

/// Textual form of a field value: strings contribute their raw text, every
/// other JSON value its compact serialization.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn internal(err: impl std::fmt::Display) -> ApiError {
    ApiError::Internal(err.to_string())
}
