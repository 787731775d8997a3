use std::fs;
use std::time::UNIX_EPOCH;

fn main() {
    // data/portfolio.json の更新日時を取得
    if let Ok(metadata) = fs::metadata("data/portfolio.json") {
        if let Ok(modified) = metadata.modified() {
            if let Ok(duration) = modified.duration_since(UNIX_EPOCH) {
                println!("cargo:rustc-env=PORTFOLIO_DATA_MODIFIED={}", duration.as_secs());
            }
        }
    } else {
        println!("cargo:warning=Could not read data/portfolio.json");
    }

    // ファイル変更時に再ビルド
    println!("cargo:rerun-if-changed=data/portfolio.json");
    println!("cargo:rerun-if-changed=config/site.json");
}
