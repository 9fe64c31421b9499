//! ARP message semantics
//!
//! Derives the intent of an ARP message from its fields and the enclosing
//! frame: a gratuitous announcement, a duplicate-address probe, or plain
//! request/reply traffic (no tags). The vendor resolver is injected, so
//! this module depends only on the display-string contract from
//! `arpsniffer-core` and never on how vendor names are produced.

use std::fmt;

use arpsniffer_core::{vendor_tags, MacAddr};

use crate::packet::ArpPacket;

/// Semantic tag attached to an ARP message
///
/// A message may carry several tags at once; [`classify`] emits them in
/// the fixed order `Announcement`, `Gratuitous`, `Probe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArpTag {
    /// Gratuitous request asserting or updating a mapping
    Announcement,
    /// Self-referential message sent to all stations
    Gratuitous,
    /// Duplicate-address detection probe
    Probe,
}

impl fmt::Display for ArpTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArpTag::Announcement => write!(f, "Announcement"),
            ArpTag::Gratuitous => write!(f, "Gratuitous"),
            ArpTag::Probe => write!(f, "Probe"),
        }
    }
}

/// Classify one ARP message
///
/// `frame_dst` is the destination hardware address of the enclosing
/// Ethernet frame, `vendor_of` the injected vendor resolver. Two
/// independent rules apply:
///
/// - A message whose sender and target protocol addresses match, carried
///   in a frame addressed to all stations (the resolver returns the
///   `"<broadcast>"` sentinel), is `Gratuitous`; if it is also a request
///   it is an `Announcement` first. An announcement is only ever tagged
///   inside the gratuitous case, never on its own.
/// - A request whose sender protocol address is `0.0.0.0` is a `Probe`,
///   regardless of the rule above.
///
/// Ordinary traffic matching neither rule yields an empty vector.
pub fn classify<F, S>(arp: &ArpPacket, frame_dst: MacAddr, vendor_of: F) -> Vec<ArpTag>
where
    F: Fn(MacAddr) -> S,
    S: AsRef<str>,
{
    let mut tags = Vec::new();

    if arp.is_gratuitous() && vendor_of(frame_dst).as_ref() == vendor_tags::BROADCAST {
        if arp.is_request() {
            tags.push(ArpTag::Announcement);
        }
        tags.push(ArpTag::Gratuitous);
    }

    if arp.is_probe() {
        tags.push(ArpTag::Probe);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    // Stand-in for a registry lookup: only the broadcast sentinel matters
    // to the classifier.
    fn plain_vendor(mac: MacAddr) -> &'static str {
        if mac.is_broadcast() {
            vendor_tags::BROADCAST
        } else {
            vendor_tags::UNKNOWN
        }
    }

    fn mac() -> MacAddr {
        MacAddr([0x00, 0x11, 0x22, 0x33, 0x44, 0x55])
    }

    #[test]
    fn test_announcement_and_gratuitous_order() {
        let arp = ArpPacket::new_gratuitous(mac(), Ipv4Addr::new(192, 168, 1, 10));
        let tags = classify(&arp, MacAddr::broadcast(), plain_vendor);
        assert_eq!(tags, vec![ArpTag::Announcement, ArpTag::Gratuitous]);
    }

    #[test]
    fn test_gratuitous_reply_has_no_announcement() {
        let ip = Ipv4Addr::new(192, 168, 1, 10);
        let arp = ArpPacket::new_reply(mac(), ip, MacAddr::broadcast(), ip);
        let tags = classify(&arp, MacAddr::broadcast(), plain_vendor);
        assert_eq!(tags, vec![ArpTag::Gratuitous]);
    }

    #[test]
    fn test_gratuitous_requires_broadcast_frame() {
        // Same self-referential shape, but unicast at the link layer
        let arp = ArpPacket::new_gratuitous(mac(), Ipv4Addr::new(192, 168, 1, 10));
        let tags = classify(&arp, mac(), plain_vendor);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_probe_alone() {
        let arp = ArpPacket::new_probe(mac(), Ipv4Addr::new(192, 168, 1, 77));
        let tags = classify(&arp, MacAddr::broadcast(), plain_vendor);
        assert_eq!(tags, vec![ArpTag::Probe]);
    }

    #[test]
    fn test_probe_for_zero_address_is_also_gratuitous() {
        // A probe for 0.0.0.0 itself satisfies both rules
        let arp = ArpPacket::new_probe(mac(), Ipv4Addr::UNSPECIFIED);
        let tags = classify(&arp, MacAddr::broadcast(), plain_vendor);
        assert_eq!(
            tags,
            vec![ArpTag::Announcement, ArpTag::Gratuitous, ArpTag::Probe]
        );
    }

    #[test]
    fn test_ordinary_request_is_untagged() {
        let arp = ArpPacket::new_request(
            mac(),
            Ipv4Addr::new(192, 168, 1, 1),
            Ipv4Addr::new(192, 168, 1, 2),
        );
        let tags = classify(&arp, MacAddr::broadcast(), plain_vendor);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_ordinary_reply_is_untagged() {
        let arp = ArpPacket::new_reply(
            mac(),
            Ipv4Addr::new(192, 168, 1, 1),
            MacAddr([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]),
            Ipv4Addr::new(192, 168, 1, 2),
        );
        let tags = classify(&arp, MacAddr([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]), plain_vendor);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_classify_is_pure() {
        let arp = ArpPacket::new_gratuitous(mac(), Ipv4Addr::new(10, 0, 0, 5));
        let first = classify(&arp, MacAddr::broadcast(), plain_vendor);
        for _ in 0..3 {
            assert_eq!(classify(&arp, MacAddr::broadcast(), plain_vendor), first);
        }
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(ArpTag::Announcement.to_string(), "Announcement");
        assert_eq!(ArpTag::Gratuitous.to_string(), "Gratuitous");
        assert_eq!(ArpTag::Probe.to_string(), "Probe");
    }
}
