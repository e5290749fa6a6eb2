use super::{DurationStats, Nanos, RunConfig, RunResult};

#[test]
fn nanos_unit_constructors_scale() -> Result<(), String> {
    let checks = [
        (Nanos::from_millis(3).as_nanos() == 3_000_000, "millis"),
        (Nanos::from_micros(7).as_nanos() == 7_000, "micros"),
        (Nanos::from_nanos(-12).as_nanos() == -12, "negative nanos"),
        (
            Nanos::from(std::time::Duration::from_millis(2)).as_nanos() == 2_000_000,
            "std duration",
        ),
        (
            Nanos::from_millis(i64::MAX).as_nanos() == i64::MAX,
            "saturating millis",
        ),
    ];
    for (ok, label) in checks {
        if !ok {
            return Err(format!("Unexpected conversion: {}", label));
        }
    }
    Ok(())
}

#[test]
fn deserialize_result_with_missing_blocks() -> Result<(), String> {
    let content = r#"{
  "config": { "remote_address": "192.0.2.10:2112" },
  "stats": {
    "rtt_stats": { "n": 3, "min": 1000, "max": 3000, "mean": 2000, "median": 2000, "stddev": 816 },
    "packets_sent": 3,
    "packets_received": 3,
    "send_rate": 1234.9
  }
}"#;
    let result: RunResult =
        serde_json::from_str(content).map_err(|err| format!("parse failed: {}", err))?;

    if result.remote_address() != Some("192.0.2.10:2112") {
        return Err("Unexpected remote address".to_owned());
    }
    let stats = match result.stats {
        Some(stats) => stats,
        None => return Err("Expected stats".to_owned()),
    };
    if stats.rtt_stats.median != Some(Nanos::from_nanos(2000)) {
        return Err("Unexpected rtt median".to_owned());
    }
    if !stats.send_delay_stats.is_empty() {
        return Err("Expected send delay stats to default to empty".to_owned());
    }
    if stats.packets_received != 3 {
        return Err("Unexpected packets_received".to_owned());
    }
    Ok(())
}

#[test]
fn empty_remote_address_is_none() -> Result<(), String> {
    let result = RunResult {
        config: Some(RunConfig {
            remote_address: String::new(),
        }),
        stats: None,
    };
    if result.remote_address().is_some() {
        return Err("Expected empty remote address to be ignored".to_owned());
    }
    if !DurationStats::default().is_empty() {
        return Err("Expected default stats to be empty".to_owned());
    }
    Ok(())
}
