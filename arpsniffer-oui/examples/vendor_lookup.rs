//! Example: Vendor lookup from registry text
//!
//! Builds an index from a small inline registry excerpt and resolves a
//! few hardware addresses, including the reserved ones. A real caller
//! would feed the full IEEE dump (oui.txt) in the same way.
//!
//! Run with: cargo run --example vendor_lookup

use arpsniffer_core::MacAddr;
use arpsniffer_oui::OuiRegistry;

const REGISTRY_EXCERPT: &str = "\
28-6F-B9   (hex)\t\tNokia Shanghai Bell Co., Ltd.
286FB9     (base 16)\t\tNokia Shanghai Bell Co., Ltd.
\t\t\t\tNo.388 Ning Qiao Road
\t\t\t\tShanghai  201206
\t\t\t\tCN

B8-27-EB   (hex)\t\tRaspberry Pi Foundation
B827EB     (base 16)\t\tRaspberry Pi Foundation
\t\t\t\tMitchell Wood House
\t\t\t\tCaldecote  CB23 7NU
\t\t\t\tGB
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = OuiRegistry::from_text(REGISTRY_EXCERPT);
    println!("Indexed {} vendor prefixes", registry.len());
    println!();

    let addresses = [
        "b8:27:eb:12:34:56",
        "28:6f:b9:00:00:01",
        "00:11:22:33:44:55",
        "00:00:00:00:00:00",
        "ff:ff:ff:ff:ff:ff",
    ];

    for text in addresses {
        let mac: MacAddr = text.parse()?;
        println!("{} -> {}", mac, registry.lookup(Some(mac)));
    }
    println!("{:>17} -> {}", "(no address)", registry.lookup(None));

    Ok(())
}
