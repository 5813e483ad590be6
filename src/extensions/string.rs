use crate::cursor::ascii::ESC_BYTE;

pub trait ToEscaped {
    /// Readable form of a control sequence: ESC becomes `\e`, other
    /// control bytes become `\xNN`, printable ASCII is kept as is.
    fn to_escaped(&self) -> String;
}

impl ToEscaped for str {
    fn to_escaped(&self) -> String {
        let mut out = String::with_capacity(self.len() * 2);
        for ch in self.chars() {
            match ch {
                c if c as u32 == u32::from(ESC_BYTE) => out.push_str("\\e"),
                '\\' => out.push_str("\\\\"),
                c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
                c => out.push(c),
            }
        }
        out
    }
}

impl ToEscaped for String {
    fn to_escaped(&self) -> String {
        self.as_str().to_escaped()
    }
}
