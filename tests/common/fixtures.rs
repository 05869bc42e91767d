/// Two conference days in Pentabarf XML.
///
/// Saturday has two main-track rooms, two devrooms and a lightning-talk room;
/// Sunday has one devroom starting at 09:55 and a certification exam.
pub const SCHEDULE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<schedule>
  <conference><title>FOSDEM 2014</title></conference>
  <day date="2014-02-01" index="1">
    <room name="Janson">
      <event id="100">
        <start>10:00</start>
        <duration>00:25</duration>
        <title>Welcome to FOSDEM</title>
        <track>Keynotes</track>
        <type>keynote</type>
        <abstract>&lt;p&gt;Opening words&lt;/p&gt;</abstract>
        <persons><person id="1">FOSDEM Staff</person></persons>
      </event>
      <event id="101">
        <start>10:30</start>
        <duration>00:50</duration>
        <title>Securing the boot chain</title>
        <track>Security</track>
        <type>maintrack</type>
        <persons><person id="2">Eve Example</person></persons>
      </event>
    </room>
    <room name="K.1.105">
      <event id="110">
        <start>11:00</start>
        <duration>00:50</duration>
        <title>Compilers - a field guide</title>
        <track>Languages</track>
        <type>maintrack</type>
        <persons><person id="3">Niklaus Wirth</person></persons>
      </event>
    </room>
    <room name="H.1302">
      <event id="200">
        <start>11:00</start>
        <duration>00:30</duration>
        <title>Rust for the rest of us</title>
        <track>Rust</track>
        <type>devroom</type>
        <persons><person id="4">Ada Lovelace</person></persons>
      </event>
      <event id="201">
        <start>11:30</start>
        <duration>00:30</duration>
        <title>Ownership &amp; borrowing</title>
        <track>Rust</track>
        <type>devroom</type>
        <persons><person id="5">Grace Hopper</person></persons>
      </event>
    </room>
    <room name="H.1308">
      <event id="210">
        <start>10:00</start>
        <duration>01:00</duration>
        <title>Go at scale</title>
        <track>Go</track>
        <type>devroom</type>
      </event>
    </room>
    <room name="AW1.120">
      <event id="300">
        <start>12:00</start>
        <duration>00:15</duration>
        <title>A quick demo</title>
        <track>Lightning Talks</track>
        <type>lightningtalk</type>
        <persons><person id="6">Linus</person></persons>
      </event>
    </room>
  </day>
  <day date="2014-02-02" index="2">
    <room name="H.1309">
      <event id="400">
        <start>09:55</start>
        <duration>00:45</duration>
        <title>Firefox OS</title>
        <track>Mozilla</track>
        <type>devroom</type>
      </event>
    </room>
    <room name="H.2213">
      <event id="500">
        <start>10:00</start>
        <duration>01:00</duration>
        <title>BSDA exam</title>
        <track>Certification</track>
        <type>certification</type>
        <persons><person id="7">BSD Certification Group</person></persons>
      </event>
    </room>
  </day>
</schedule>"#;

/// Two bookings of the same room that overlap by fifteen minutes.
pub const OVERLAPPING_JSON: &str = r#"[
  { "id": "1", "day": "2014-02-01", "room": "H.1302", "track": "Rust", "type": "devroom",
    "title": "First", "start": "10:00", "duration": "00:30" },
  { "id": "2", "day": "2014-02-01", "room": "H.1302", "track": "Rust", "type": "devroom",
    "title": "Second", "start": "10:15", "stop": "11:00" }
]"#;

/// An event without a start time.
pub const MALFORMED_JSON: &str = r#"[
  { "id": "9", "day": "2014-02-01", "room": "H.1302", "title": "Whenever", "duration": "00:30" }
]"#;
