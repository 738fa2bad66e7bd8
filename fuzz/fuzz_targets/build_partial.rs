#![no_main]
use apache_avro::Schema;
use avro_partial::build_partial;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };
    let schema = match Schema::parse_str(text) {
        Ok(schema) => schema,
        Err(_) => return,
    };
    let first_field = match &schema {
        Schema::Record(record) => record.fields.first().map(|f| f.name.clone()),
        _ => None,
    };
    if let Some(field) = first_field {
        let _ = build_partial(&schema, &field);
    }
});
