use super::QuestionnaireImportError;
use crate::workflows::screening::RawAnswers;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::{Number, Value};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawAnswers>, QuestionnaireImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut seen = HashSet::new();
    for header in headers.iter() {
        if !seen.insert(header) {
            return Err(QuestionnaireImportError::DuplicateColumn(header.to_string()));
        }
    }

    let mut batch = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        batch.push(RawAnswers::from_pairs(headers.iter().zip(record.iter())));
    }

    Ok(batch)
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<RawAnswers>, QuestionnaireImportError> {
    let document: JsonDocument = serde_json::from_reader(reader)?;

    document
        .0
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            JsonRecord::Object(entries) => answers_from_entries(index + 1, entries),
            JsonRecord::Other => Err(QuestionnaireImportError::UnsupportedValue {
                record: index + 1,
                key: "<root>".to_string(),
            }),
        })
        .collect()
}

fn answers_from_entries(
    record: usize,
    entries: Vec<(String, Value)>,
) -> Result<RawAnswers, QuestionnaireImportError> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        if !seen.insert(key.clone()) {
            return Err(QuestionnaireImportError::DuplicateColumn(key));
        }
        let text = match value {
            Value::String(text) => text,
            Value::Number(number) => number_text(&number),
            Value::Null => String::new(),
            _ => return Err(QuestionnaireImportError::UnsupportedValue { record, key }),
        };
        pairs.push((key, text));
    }
    Ok(RawAnswers::from_pairs(pairs))
}

/// Integral floats (`45.0`) are written without a fraction so they read as whole numbers.
fn number_text(number: &Number) -> String {
    if number.is_f64() {
        if let Some(value) = number.as_f64() {
            return value.to_string();
        }
    }
    number.to_string()
}

/// Top-level document: one object or an array of items. Object keys are kept in order with
/// repeats, which `serde_json::Map` would collapse.
struct JsonDocument(Vec<JsonRecord>);

enum JsonRecord {
    Object(Vec<(String, Value)>),
    Other,
}

impl<'de> Deserialize<'de> for JsonDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = JsonDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a questionnaire object or an array of them")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                Ok(JsonDocument(vec![JsonRecord::Object(collect_entries(map)?)]))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<JsonRecord>()? {
                    items.push(item);
                }
                Ok(JsonDocument(items))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(JsonDocument(vec![JsonRecord::Other]))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(JsonDocument(vec![JsonRecord::Other]))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(JsonDocument(vec![JsonRecord::Other]))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(JsonDocument(vec![JsonRecord::Other]))
            }

            fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
                Ok(JsonDocument(vec![JsonRecord::Other]))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(JsonDocument(vec![JsonRecord::Other]))
            }
        }

        deserializer.deserialize_any(DocumentVisitor)
    }
}

impl<'de> Deserialize<'de> for JsonRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = JsonRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a questionnaire object")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                Ok(JsonRecord::Object(collect_entries(map)?))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(JsonRecord::Other)
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(JsonRecord::Other)
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(JsonRecord::Other)
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(JsonRecord::Other)
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(JsonRecord::Other)
            }

            fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
                Ok(JsonRecord::Other)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(JsonRecord::Other)
            }
        }

        deserializer.deserialize_any(RecordVisitor)
    }
}

fn collect_entries<'de, A: MapAccess<'de>>(
    mut map: A,
) -> Result<Vec<(String, Value)>, A::Error> {
    let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
    while let Some((key, value)) = map.next_entry::<String, Value>()? {
        entries.push((key, value));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::screening::QuestionnaireField;
    use std::io::Cursor;

    #[test]
    fn csv_rows_become_trimmed_answers() {
        let csv = "nom_patient,age,poids,extra\n  Jeanne , 52 ,64,ignored\nPaul,70,\"90,5\",x\n";

        let batch = parse_csv(Cursor::new(csv)).expect("csv parses");

        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].get(QuestionnaireField::PatientName), "Jeanne");
        assert_eq!(batch[0].get(QuestionnaireField::Age), "52");
        assert_eq!(batch[1].get(QuestionnaireField::Weight), "90,5");
        assert_eq!(batch[1].get(QuestionnaireField::Sex), "");
    }

    #[test]
    fn csv_rejects_duplicate_columns() {
        let csv = "age,age\n40,41\n";

        match parse_csv(Cursor::new(csv)) {
            Err(QuestionnaireImportError::DuplicateColumn(name)) => assert_eq!(name, "age"),
            other => panic!("expected duplicate column error, got {other:?}"),
        }
    }

    #[test]
    fn json_rejects_repeated_keys() {
        let json = r#"[{"age": "45"}, {"age": "30", "sexe": "homme", "age": "70"}]"#;

        match parse_json(Cursor::new(json)) {
            Err(QuestionnaireImportError::DuplicateColumn(name)) => assert_eq!(name, "age"),
            other => panic!("expected duplicate column error, got {other:?}"),
        }
    }

    #[test]
    fn json_integral_floats_read_as_whole_numbers() {
        let json = r#"{"age": 45.0, "poids": 72.50, "taille": 1e2}"#;

        let batch = parse_json(Cursor::new(json)).expect("json parses");

        assert_eq!(batch[0].get(QuestionnaireField::Age), "45");
        assert_eq!(batch[0].get(QuestionnaireField::Weight), "72.5");
        assert_eq!(batch[0].get(QuestionnaireField::Height), "100");
    }

    #[test]
    fn json_accepts_single_object_with_numbers() {
        let json = r#"{"age": 45, "poids": 72.5, "sexe": "femme", "nom_patient": null}"#;

        let batch = parse_json(Cursor::new(json)).expect("json parses");

        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].get(QuestionnaireField::Age), "45");
        assert_eq!(batch[0].get(QuestionnaireField::Weight), "72.5");
        assert_eq!(batch[0].get(QuestionnaireField::PatientName), "");
    }

    #[test]
    fn json_rejects_nested_values() {
        let json = r#"[{"age": "40"}, {"tabac": true}]"#;

        match parse_json(Cursor::new(json)) {
            Err(QuestionnaireImportError::UnsupportedValue { record, key }) => {
                assert_eq!(record, 2);
                assert_eq!(key, "tabac");
            }
            other => panic!("expected unsupported value error, got {other:?}"),
        }
    }
}
