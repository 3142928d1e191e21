use ascii_kit::{
    line_ending, trim, AsciiParse, AsciiRawValue, AsciiSerializable, Delimited, Delimiter, Error,
    LineEnding, ListOptions, Pair, Token,
};
use std::fmt;

/// `major.minor`, context-free.
#[derive(Debug, PartialEq, Clone, Copy)]
struct Version {
    major: u32,
    minor: u32,
}

impl AsciiSerializable for Version {
    type Context = ();
    type Error = Error;

    fn parse(bytes: &[u8], _: &()) -> Result<Self, Error> {
        let dot = bytes
            .iter()
            .position(|&b| b == b'.')
            .ok_or_else(|| Error::missing_delimiter('.'))?;
        Ok(Version {
            major: u32::parse_ascii(&bytes[..dot])?,
            minor: u32::parse_ascii(&bytes[dot + 1..]).map_err(|e| e.offset_by(dot + 1))?,
        })
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        self.major.serialize_into(buffer);
        buffer.push(b'.');
        self.minor.serialize_into(buffer);
    }
}

// Display goes through the raw value, which is derived from serialize_into.
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_value())
    }
}

/// `<host> <port> <tags>` where tags are split on a delimiter given at parse time.
#[derive(Debug, PartialEq)]
struct Endpoint {
    host: Token,
    port: u16,
    tags: Delimited<Token>,
}

impl AsciiSerializable for Endpoint {
    type Context = Delimiter;
    type Error = Error;

    fn parse(bytes: &[u8], context: &Delimiter) -> Result<Self, Error> {
        let mut parts = bytes.splitn(3, |&b| b == b' ');
        let (Some(host), Some(port), Some(tags)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::missing_delimiter(' '));
        };
        Ok(Endpoint {
            host: Token::parse_ascii(host)?,
            port: u16::parse_ascii(port)?,
            tags: Delimited::parse(tags, &ListOptions::new().with_delimiter(*context))?,
        })
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        self.host.serialize_into(buffer);
        buffer.push(b' ');
        self.port.serialize_into(buffer);
        buffer.push(b' ');
        self.tags.serialize_into(buffer);
    }
}

#[test]
fn test_user_defined_context_free_type() {
    let version = Version::parse_ascii_str("1.12").unwrap();
    assert_eq!(version, Version { major: 1, minor: 12 });
    assert_eq!(version.to_string(), "1.12");
    assert_eq!(version.serialize(), b"1.12");

    assert_eq!(Version::parse_ascii(b"112"), Err(Error::missing_delimiter('.')));
    assert_eq!(
        Version::parse_ascii(b"1.x"),
        Err(Error::invalid_byte(2, b'x', "decimal digit"))
    );
}

#[test]
fn test_user_defined_context_bearing_type() {
    let endpoint = Endpoint::parse(b"example.org 443 web|tls", &Delimiter::Pipe).unwrap();
    assert_eq!(endpoint.host.as_str(), "example.org");
    assert_eq!(endpoint.port, 443);
    assert_eq!(endpoint.tags.len(), 2);
    assert_eq!(endpoint.raw_value(), "example.org 443 web|tls");

    // Same bytes, different context
    let endpoint = Endpoint::parse(b"example.org 443 web|tls", &Delimiter::Comma).unwrap();
    assert_eq!(endpoint.tags.len(), 1);
    assert_eq!(endpoint.tags.items()[0].as_str(), "web|tls");

    assert_eq!(
        Endpoint::parse(b"example.org 443", &Delimiter::Pipe),
        Err(Error::missing_delimiter(' '))
    );
}

#[test]
fn test_round_trip_with_same_context() {
    let inputs: [(&[u8], Delimiter); 3] = [
        (b"a 1 x", Delimiter::Comma),
        (b"host 65535 a;b;c", Delimiter::Semicolon),
        (b"h 0 t1\tt2", Delimiter::Tab),
    ];
    for (input, delimiter) in inputs {
        let parsed = Endpoint::parse(input, &delimiter).unwrap();
        let serialized = parsed.serialize();
        assert_eq!(serialized, input);
        assert_eq!(Endpoint::parse(&serialized, &delimiter), Ok(parsed));
    }
}

#[test]
fn test_composition_into_shared_buffer() {
    let version = Version { major: 2, minor: 0 };
    let endpoint = Endpoint::parse(b"localhost 8080 dev", &Delimiter::Comma).unwrap();
    let weights = Delimited::new(Delimiter::Comma, vec![-1i64, 0, 1]);

    let mut buffer = Vec::with_capacity(64);
    buffer.extend_from_slice(b"v=");
    version.serialize_into(&mut buffer);
    buffer.push(b';');
    endpoint.serialize_into(&mut buffer);
    buffer.push(b';');
    weights.serialize_into(&mut buffer);

    assert_eq!(buffer, b"v=2.0;localhost 8080 dev;-1,0,1");
}

#[test]
fn test_text_pipeline() {
    // Mixed line endings, padded fields and a blank trailing line
    let config = b"  retries = 3 \r\nport=8080\n\ttimeout =30\r\n";
    assert!(line_ending::has_mixed_line_endings(config));

    let normalized = line_ending::normalize(config, LineEnding::Lf);
    assert!(!line_ending::has_mixed_line_endings(&normalized));

    let mut settings = Vec::new();
    for line in normalized.split(|&b| b == b'\n') {
        let line = trim::trim_ascii_whitespace(line);
        if line.is_empty() {
            continue;
        }
        let compact: Vec<u8> = line
            .iter()
            .filter(|&&b| b != b' ')
            .map(|&b| if b == b'=' { b':' } else { b })
            .collect();
        let setting = Pair::<Token, u32>::parse(&compact, &Delimiter::Colon).unwrap();
        settings.push(setting.raw_value());
    }

    assert_eq!(settings, vec!["retries:3", "port:8080", "timeout:30"]);
}

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
struct Manifest {
    #[serde(with = "ascii_kit::serde_ascii")]
    name: Token,
    #[serde(with = "ascii_kit::serde_ascii")]
    version: Version,
    line_ending: LineEnding,
}

#[test]
fn test_serde_adapter_with_user_type() {
    let manifest = Manifest {
        name: Token::new("ascii_kit").unwrap(),
        version: Version { major: 0, minor: 1 },
        line_ending: LineEnding::Lf,
    };
    let json = serde_json::to_string(&manifest).unwrap();
    assert_eq!(
        json,
        r#"{"name":"ascii_kit","version":"0.1","line_ending":"LF"}"#
    );
    let back: Manifest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, manifest);

    let bad = r#"{"name":"ascii_kit","version":"01","line_ending":"LF"}"#;
    assert!(serde_json::from_str::<Manifest>(bad).is_err());
}
