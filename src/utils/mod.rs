//! ユーティリティモジュール

pub mod fetch;
pub mod log_trace;

// 共通ヘルパー

/// コンテンツの更新日（ビルド時に埋め込み）
pub fn format_data_modified_time() -> String {
    let timestamp_str = option_env!("PORTFOLIO_DATA_MODIFIED").unwrap_or("0");
    let timestamp: i64 = timestamp_str.parse().unwrap_or(0);
    format_modified_date(timestamp)
}

fn format_modified_date(timestamp: i64) -> String {
    if timestamp <= 0 {
        return "Última actualización: desconocida".to_string();
    }
    let days = timestamp / 86400;
    let (year, month, day) = days_to_ymd(days);
    format!("Última actualización: {}-{:02}-{:02}", year, month, day)
}

fn days_to_ymd(days: i64) -> (i64, i64, i64) {
    // 1970-01-01 からの日数をグレゴリオ暦に変換
    let mut remaining = days;
    let mut year = 1970;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining < days_in_year {
            break;
        }
        remaining -= days_in_year;
        year += 1;
    }
    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };
    let mut month = 1;
    for &d in &days_in_months {
        if remaining < d {
            break;
        }
        remaining -= d;
        month += 1;
    }
    (year, month, remaining + 1)
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_to_ymd() {
        assert_eq!(days_to_ymd(0), (1970, 1, 1));
        // 2000-02-29 (閏年)
        assert_eq!(days_to_ymd(11016), (2000, 2, 29));
        assert_eq!(days_to_ymd(19723), (2024, 1, 1));
    }

    #[test]
    fn test_format_modified_date() {
        assert_eq!(format_modified_date(0), "Última actualización: desconocida");
        assert_eq!(format_modified_date(1_704_067_200), "Última actualización: 2024-01-01");
    }
}
