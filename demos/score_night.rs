//! Score a sample night and print the result

fn main() {
    let json = r#"{
        "bedtime": "23:30",
        "wake_time": "07:00",
        "tst_min": 410,
        "waso_min": 25,
        "awakenings": 2,
        "deep_min": 70,
        "rem_min": 85,
        "caffeine_after_14": true
    }"#;

    match somnus::score_json(json) {
        Ok(result) => println!("{result}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
