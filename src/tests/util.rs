use serde_json::Value;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn parse_json(text: &str) -> Value {
    init_logger();
    serde_json::from_str(text).unwrap()
}
