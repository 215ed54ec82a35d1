//! Report generation

use crate::models::{PageState, TargetConfig};
use crate::GeneratedPackage;

pub fn generate_config_report(config: &TargetConfig) -> String {
    let mut report = String::new();

    report.push_str("# Site Shortcut App\n\n");
    report.push_str("## Target\n\n");
    report.push_str(&format!("- **URL**: {}\n", config.source_url));
    report.push_str(&format!("- **Title**: {}\n", config.title));
    report.push_str(&format!("- **Host key**: {}\n", config.normalized_host()));
    report.push_str(&format!("- **Filename**: {}\n", config.filename));

    match &config.page {
        PageState::Fetched { final_url, icon_ref } => {
            report.push_str(&format!("- **Page**: fetched from {}\n", final_url));
            match icon_ref {
                Some(href) => report.push_str(&format!("- **Favicon**: {}\n", href)),
                None => report.push_str("- **Favicon**: none declared\n"),
            }
        }
        PageState::Unreachable => {
            report.push_str("- **Page**: unreachable, defaults used\n");
        }
    }
    report.push('\n');

    report
}

pub fn generate_markdown_report(package: &GeneratedPackage) -> String {
    let mut report = generate_config_report(&package.config);

    report.push_str("## Package\n\n");
    report.push_str(&format!("- **Icon**: {}\n", package.icon));
    if package.icon.is_default() {
        report.push_str("- **Note**: no site icon was found, the template icon was kept\n");
    }
    report.push_str(&format!("- **Size**: {} bytes\n\n", package.bytes.len()));

    // The bundled packager writes an unsigned ZIP, which Chrome only
    // accepts as an unpacked directory.
    report.push_str("## Next Steps\n\n");
    report.push_str(&format!("1. Extract {} into a folder (it is a ZIP archive)\n", package.filename));
    report.push_str("2. Open chrome://extensions and enable Developer mode\n");
    report.push_str("3. Click \"Load unpacked\" and select the extracted folder\n");
    report.push_str("4. Launch the app from chrome://apps\n\n");

    report
}
