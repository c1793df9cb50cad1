//! Regions command handler.

use osmkit_download::DownloaderConfig;

/// Print every configured region as `name<TAB>left,bottom,right,top`.
pub fn execute(config: &DownloaderConfig) {
    print!("{}", format_regions(config));
}

fn format_regions(config: &DownloaderConfig) -> String {
    config
        .regions()
        .iter()
        .map(|(name, bbox)| format!("{name}\t{bbox}\n"))
        .collect()
}
