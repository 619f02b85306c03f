use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;

/// Minutes per day the user can spend watching. The backend spreads the
/// found videos over the week according to this budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyTime {
    Min15,
    Min20,
    Min30,
    Min40,
    Min90,
    Min120,
    Min150,
}

impl DailyTime {
    pub fn all_variants() -> [Self; 7] {
        [
            DailyTime::Min15,
            DailyTime::Min20,
            DailyTime::Min30,
            DailyTime::Min40,
            DailyTime::Min90,
            DailyTime::Min120,
            DailyTime::Min150,
        ]
    }

    // Used both as the element id and as the `dailyTime` query value.
    pub fn key(&self) -> &'static str {
        match self {
            DailyTime::Min15 => "15",
            DailyTime::Min20 => "20",
            DailyTime::Min30 => "30",
            DailyTime::Min40 => "40",
            DailyTime::Min90 => "90",
            DailyTime::Min120 => "120",
            DailyTime::Min150 => "150",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "15" => Some(DailyTime::Min15),
            "20" => Some(DailyTime::Min20),
            "30" => Some(DailyTime::Min30),
            "40" => Some(DailyTime::Min40),
            "90" => Some(DailyTime::Min90),
            "120" => Some(DailyTime::Min120),
            "150" => Some(DailyTime::Min150),
            _ => None,
        }
    }
}

// Reads the "id" of the clicked element without casting to a concrete type.
pub fn event_target_id(e: &MouseEvent) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("id")).ok()?;
    js_value.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_are_the_seven_fixed_values_in_order() {
        let keys: Vec<&str> = DailyTime::all_variants().iter().map(DailyTime::key).collect();
        assert_eq!(keys, vec!["15", "20", "30", "40", "90", "120", "150"]);
    }

    #[test]
    fn key_and_from_key_agree() {
        for bucket in DailyTime::all_variants() {
            assert_eq!(DailyTime::from_key(bucket.key()), Some(bucket));
        }
    }

    #[test]
    fn unknown_ids_are_not_buckets() {
        assert_eq!(DailyTime::from_key(""), None);
        assert_eq!(DailyTime::from_key("60"), None);
        assert_eq!(DailyTime::from_key(" 90"), None);
    }
}
