//! ARP packet structure and parsing

use arpsniffer_core::{Error, MacAddr, Result};
use arpsniffer_packet::{EtherType, EthernetFrame};
use bytes::{BufMut, BytesMut};
use std::fmt;
use std::net::Ipv4Addr;

/// Hardware types
pub const HTYPE_ETHERNET: u16 = 1;

/// Protocol types
pub const PTYPE_IPV4: u16 = 0x0800;

/// ARP operation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArpOpcode {
    /// ARP Request
    Request = 1,
    /// ARP Reply
    Reply = 2,
}

impl ArpOpcode {
    pub fn from_u16(val: u16) -> Option<Self> {
        match val {
            1 => Some(Self::Request),
            2 => Some(Self::Reply),
            _ => None,
        }
    }
}

impl fmt::Display for ArpOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArpOpcode::Request => write!(f, "Request"),
            ArpOpcode::Reply => write!(f, "Reply"),
        }
    }
}

/// ARP packet
#[derive(Debug, Clone)]
pub struct ArpPacket {
    /// Hardware type (typically 1 for Ethernet)
    pub htype: u16,
    /// Protocol type (typically 0x0800 for IPv4)
    pub ptype: u16,
    /// Hardware address length (6 for MAC)
    pub hlen: u8,
    /// Protocol address length (4 for IPv4)
    pub plen: u8,
    /// Operation
    pub operation: ArpOpcode,
    /// Sender hardware address (MAC)
    pub sender_hw_addr: MacAddr,
    /// Sender protocol address (IP)
    pub sender_proto_addr: Ipv4Addr,
    /// Target hardware address (MAC)
    pub target_hw_addr: MacAddr,
    /// Target protocol address (IP)
    pub target_proto_addr: Ipv4Addr,
}

impl ArpPacket {
    /// Create new ARP request
    pub fn new_request(sender_mac: MacAddr, sender_ip: Ipv4Addr, target_ip: Ipv4Addr) -> Self {
        Self {
            htype: HTYPE_ETHERNET,
            ptype: PTYPE_IPV4,
            hlen: 6,
            plen: 4,
            operation: ArpOpcode::Request,
            sender_hw_addr: sender_mac,
            sender_proto_addr: sender_ip,
            target_hw_addr: MacAddr::zero(), // Unknown in request
            target_proto_addr: target_ip,
        }
    }

    /// Create new ARP reply
    pub fn new_reply(
        sender_mac: MacAddr,
        sender_ip: Ipv4Addr,
        target_mac: MacAddr,
        target_ip: Ipv4Addr,
    ) -> Self {
        Self {
            htype: HTYPE_ETHERNET,
            ptype: PTYPE_IPV4,
            hlen: 6,
            plen: 4,
            operation: ArpOpcode::Reply,
            sender_hw_addr: sender_mac,
            sender_proto_addr: sender_ip,
            target_hw_addr: target_mac,
            target_proto_addr: target_ip,
        }
    }

    /// Create gratuitous ARP (sender and target protocol addresses equal)
    pub fn new_gratuitous(mac: MacAddr, ip: Ipv4Addr) -> Self {
        Self {
            htype: HTYPE_ETHERNET,
            ptype: PTYPE_IPV4,
            hlen: 6,
            plen: 4,
            operation: ArpOpcode::Request,
            sender_hw_addr: mac,
            sender_proto_addr: ip,
            target_hw_addr: MacAddr::zero(),
            target_proto_addr: ip, // Same as sender
        }
    }

    /// Create an ARP probe (request with unspecified sender protocol
    /// address, used for duplicate-address detection)
    pub fn new_probe(mac: MacAddr, probed_ip: Ipv4Addr) -> Self {
        Self {
            htype: HTYPE_ETHERNET,
            ptype: PTYPE_IPV4,
            hlen: 6,
            plen: 4,
            operation: ArpOpcode::Request,
            sender_hw_addr: mac,
            sender_proto_addr: Ipv4Addr::UNSPECIFIED,
            target_hw_addr: MacAddr::zero(),
            target_proto_addr: probed_ip,
        }
    }

    /// Parse ARP packet from bytes
    ///
    /// A truncated payload or an operation code other than request/reply
    /// is a parse error; malformed traffic is reported, never guessed at.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 28 {
            return Err(Error::parsing("ARP packet too short"));
        }

        let htype = u16::from_be_bytes([data[0], data[1]]);
        let ptype = u16::from_be_bytes([data[2], data[3]]);
        let hlen = data[4];
        let plen = data[5];
        let op_val = u16::from_be_bytes([data[6], data[7]]);

        let operation =
            ArpOpcode::from_u16(op_val).ok_or_else(|| Error::parsing("Invalid ARP opcode"))?;

        let mut sender_hw_addr = [0u8; 6];
        sender_hw_addr.copy_from_slice(&data[8..14]);

        let sender_proto_addr = Ipv4Addr::new(data[14], data[15], data[16], data[17]);

        let mut target_hw_addr = [0u8; 6];
        target_hw_addr.copy_from_slice(&data[18..24]);

        let target_proto_addr = Ipv4Addr::new(data[24], data[25], data[26], data[27]);

        Ok(Self {
            htype,
            ptype,
            hlen,
            plen,
            operation,
            sender_hw_addr: MacAddr(sender_hw_addr),
            sender_proto_addr,
            target_hw_addr: MacAddr(target_hw_addr),
            target_proto_addr,
        })
    }

    /// Extract an ARP message from an Ethernet frame
    ///
    /// Returns `Ok(None)` for non-ARP traffic. A single 802.1Q tag is
    /// unwrapped; anything nested deeper counts as non-ARP.
    pub fn from_ethernet(frame: &EthernetFrame) -> Result<Option<Self>> {
        match frame.ethertype {
            EtherType::ARP => Self::parse(&frame.payload).map(Some),
            EtherType::VLAN => {
                // 802.1Q tag: TCI (2 bytes) + inner EtherType (2 bytes)
                if frame.payload.len() < 4 {
                    return Err(Error::parsing("802.1Q tag truncated"));
                }
                let inner = u16::from_be_bytes([frame.payload[2], frame.payload[3]]);
                if EtherType::from_u16(inner) == EtherType::ARP {
                    Self::parse(&frame.payload[4..]).map(Some)
                } else {
                    Ok(None)
                }
            }
            _ => Ok(None),
        }
    }

    /// Serialize ARP packet to bytes
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = BytesMut::with_capacity(28);

        buf.put_u16(self.htype);
        buf.put_u16(self.ptype);
        buf.put_u8(self.hlen);
        buf.put_u8(self.plen);
        buf.put_u16(self.operation as u16);
        buf.put_slice(self.sender_hw_addr.as_bytes());
        buf.put_slice(&self.sender_proto_addr.octets());
        buf.put_slice(self.target_hw_addr.as_bytes());
        buf.put_slice(&self.target_proto_addr.octets());

        buf.to_vec()
    }

    /// Check if this is a request
    pub fn is_request(&self) -> bool {
        self.operation == ArpOpcode::Request
    }

    /// Check if this is a reply
    pub fn is_reply(&self) -> bool {
        self.operation == ArpOpcode::Reply
    }

    /// Check if this is self-referential (sender and target protocol
    /// addresses equal), the shape shared by gratuitous traffic
    pub fn is_gratuitous(&self) -> bool {
        self.sender_proto_addr == self.target_proto_addr
    }

    /// Check if this is a duplicate-address probe
    pub fn is_probe(&self) -> bool {
        self.operation == ArpOpcode::Request && self.sender_proto_addr.is_unspecified()
    }
}
