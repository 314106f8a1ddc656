use crate::domain::model::FormParams;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left bare by the legacy client's value encoding: ASCII
/// alphanumerics plus `- _ . ! ~ * ' ( )`. Everything else, including
/// space, is percent-encoded.
const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Serializes parameters into the `key=value&` wire form: keys verbatim,
/// values percent-encoded, every pair terminated by `&` (the trailing
/// ampersand is part of the format), no leading `?`.
pub fn encode_form_body(params: &FormParams) -> String {
    let mut body = String::new();
    for (name, value) in params.iter() {
        body.push_str(name);
        body.push('=');
        body.push_str(&utf8_percent_encode(value, VALUE_ENCODE_SET).to_string());
        body.push('&');
    }
    body
}
