//! Relaxed JSON input
//!
//! Blanks out `//` line comments, `/* */` block comments and trailing commas
//! so the remaining text is strict JSON. Removed bytes are replaced with
//! spaces and newlines are kept, so parser line/column positions still point
//! into the original text.

/// Strip comments and trailing commas from `text`
pub fn strip(text: &str) -> String {
    let mut bytes = text.as_bytes().to_vec();
    blank_comments(&mut bytes);
    blank_trailing_commas(&mut bytes);
    // Only whole ASCII runs or whole comments were replaced, so this is still UTF-8
    String::from_utf8_lossy(&bytes).into_owned()
}

fn blank_comments(bytes: &mut [u8]) {
    let mut i = 0;
    let mut in_string = false;

    while i < bytes.len() {
        let b = bytes[i];

        if in_string {
            match b {
                b'\\' => i += 1,
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        match (b, bytes.get(i + 1).copied()) {
            (b'"', _) => {
                in_string = true;
                i += 1;
            }
            (b'/', Some(b'/')) => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    bytes[i] = b' ';
                    i += 1;
                }
            }
            (b'/', Some(b'*')) => {
                bytes[i] = b' ';
                bytes[i + 1] = b' ';
                i += 2;
                while i < bytes.len() {
                    if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                        bytes[i] = b' ';
                        bytes[i + 1] = b' ';
                        i += 2;
                        break;
                    }
                    if bytes[i] != b'\n' {
                        bytes[i] = b' ';
                    }
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
}

/// Must run after `blank_comments`
fn blank_trailing_commas(bytes: &mut [u8]) {
    let mut i = 0;
    let mut in_string = false;

    while i < bytes.len() {
        let b = bytes[i];

        if in_string {
            match b {
                b'\\' => i += 1,
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        match b {
            b'"' => in_string = true,
            b',' => {
                let next = bytes[i + 1..]
                    .iter()
                    .copied()
                    .find(|c| !c.is_ascii_whitespace());
                // A comma with no element before it is left for the parser to reject
                let prev = bytes[..i]
                    .iter()
                    .rev()
                    .copied()
                    .find(|c| !c.is_ascii_whitespace());
                let follows_element = !matches!(prev, None | Some(b'[') | Some(b'{') | Some(b','));
                if follows_element && matches!(next, Some(b'}') | Some(b']')) {
                    bytes[i] = b' ';
                }
            }
            _ => {}
        }
        i += 1;
    }
}
