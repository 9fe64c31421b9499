//! Example: Annotating a stream of ARP frames
//!
//! Composes the OUI registry index with the passive monitor the way a
//! capture loop would: raw frames go in, two-line annotated records come
//! out. The frames here are synthesized; a real caller would wrap each
//! frame from its capture library in a `CapturedFrame` instead.
//!
//! Run with: cargo run --example annotate_frames

use std::net::Ipv4Addr;

use arpsniffer_arp::{ArpMonitor, ArpPacket};
use arpsniffer_core::{CapturedFrame, MacAddr};
use arpsniffer_oui::OuiRegistry;
use arpsniffer_packet::{EtherType, EthernetFrame};

const REGISTRY_EXCERPT: &str = "\
286FB9     (base 16)\t\tNokia Shanghai Bell Co., Ltd.
B827EB     (base 16)\t\tRaspberry Pi Foundation
";

fn frame(arp: &ArpPacket, frame_dst: MacAddr) -> CapturedFrame {
    let eth = EthernetFrame::new(frame_dst, arp.sender_hw_addr, EtherType::ARP, arp.serialize());
    CapturedFrame::new("eth0".to_string(), eth.to_bytes())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = OuiRegistry::from_text(REGISTRY_EXCERPT);
    let monitor = ArpMonitor::new();

    let pi = MacAddr([0xB8, 0x27, 0xEB, 0x01, 0x02, 0x03]);
    let nokia = MacAddr([0x28, 0x6F, 0xB9, 0xAA, 0xBB, 0xCC]);

    let traffic = [
        // A host announcing its new address to everyone
        frame(
            &ArpPacket::new_gratuitous(pi, Ipv4Addr::new(192, 168, 1, 50)),
            MacAddr::broadcast(),
        ),
        // Duplicate-address detection before claiming 192.168.1.77
        frame(
            &ArpPacket::new_probe(nokia, Ipv4Addr::new(192, 168, 1, 77)),
            MacAddr::broadcast(),
        ),
        // Ordinary resolution traffic
        frame(
            &ArpPacket::new_request(
                pi,
                Ipv4Addr::new(192, 168, 1, 50),
                Ipv4Addr::new(192, 168, 1, 1),
            ),
            MacAddr::broadcast(),
        ),
        frame(
            &ArpPacket::new_reply(
                nokia,
                Ipv4Addr::new(192, 168, 1, 1),
                pi,
                Ipv4Addr::new(192, 168, 1, 50),
            ),
            pi,
        ),
    ];

    for captured in &traffic {
        if let Some(record) = monitor.observe(captured, |mac| registry.lookup(Some(mac)))? {
            println!();
            println!("{}", record);
        }
    }

    let stats = monitor.stats();
    println!();
    println!(
        "Seen {} frames: {} requests, {} replies, {} announcements, {} gratuitous, {} probes",
        stats.frames_seen,
        stats.requests,
        stats.replies,
        stats.announcements,
        stats.gratuitous,
        stats.probes
    );

    Ok(())
}
