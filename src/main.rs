//! Renders the Inkwell app icon at every macOS iconset size and packages
//! the result as `Inkwell.icns`. Takes no arguments; run it from the
//! Inkwell source tree.

mod bundle;
mod glyph;
mod icon;
mod iconset;
mod logger;

use bundle::BundleOptions;

fn main() -> anyhow::Result<()> {
    let opts = BundleOptions::discover();
    match bundle::build(&opts) {
        Ok(report) => {
            logger::log_line(&format!("bundle complete, {} files staged", report.staged));
        }
        Err(err) if err.is_compiler_failure() => {
            // Staged PNGs are deliberately left behind for diagnosis.
            println!("  ✗ Error creating .icns file: {err}");
            println!("  Note: iconutil is required (comes with Xcode)");
            logger::log_error("icns compile", &err);
        }
        Err(err) => return Err(err.into()),
    }

    println!("\nIcon creation complete!");
    println!("Next steps:");
    println!("1. Update Info.plist to reference 'Inkwell' as CFBundleIconFile");
    println!("2. Rebuild the application");
    Ok(())
}
