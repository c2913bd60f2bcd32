//! Parsing of console request lines.
//!
//! A request is one line of text:
//!
//! ```text
//! keyword [":" key "=" value {"," key "=" value}]
//! ```
//!
//! Every token is trimmed, so `register-team : stadium-id = 1 , name = Doosan`
//! and `register-team:stadium-id=1,name=Doosan` parse identically. Keys must
//! be unique within one request; values may contain `=` but not `,`.

use super::errors::DispatchError;

/// A parsed request line: the command keyword plus its key/value fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    keyword: String,
    fields: Vec<(String, String)>,
}

impl Request {
    /// Parses one non-blank request line.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Malformed`] when the keyword is missing, a
    /// field lacks `=`, a key or value is empty, or a key repeats.
    pub fn parse(line: &str) -> Result<Self, DispatchError> {
        let trimmed = line.trim();
        let (head, body) = match trimmed.split_once(':') {
            Some((head, body)) => (head, Some(body)),
            None => (trimmed, None),
        };

        let keyword = head.trim();
        if keyword.is_empty() {
            return Err(DispatchError::malformed("missing keyword"));
        }

        let fields = match body {
            Some(body) => parse_fields(body)?,
            None => Vec::new(),
        };

        Ok(Self {
            keyword: keyword.to_owned(),
            fields,
        })
    }

    /// Returns the command keyword.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Starts consuming the request's fields.
    #[must_use]
    pub fn fields(&self) -> FieldReader<'_> {
        FieldReader::new(&self.fields)
    }

    /// Fails when the request carries a body.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Malformed`] when any field is present.
    pub fn expect_no_body(&self) -> Result<(), DispatchError> {
        if self.fields.is_empty() {
            return Ok(());
        }
        Err(DispatchError::malformed(format!(
            "{:?} takes no fields",
            self.keyword
        )))
    }
}

fn parse_fields(body: &str) -> Result<Vec<(String, String)>, DispatchError> {
    let mut fields: Vec<(String, String)> = Vec::new();
    for raw in body.split(',') {
        let field = raw.trim();
        if field.is_empty() {
            return Err(DispatchError::malformed("empty field in request body"));
        }
        let Some((raw_key, raw_value)) = field.split_once('=') else {
            return Err(DispatchError::malformed(format!(
                "field {field:?} must look like key=value"
            )));
        };
        let key = raw_key.trim();
        let value = raw_value.trim();
        if key.is_empty() {
            return Err(DispatchError::malformed(format!(
                "field {field:?} has an empty key"
            )));
        }
        if value.is_empty() {
            return Err(DispatchError::malformed(format!(
                "field {key:?} has an empty value"
            )));
        }
        if fields.iter().any(|(existing, _)| existing == key) {
            return Err(DispatchError::malformed(format!("duplicate field {key:?}")));
        }
        fields.push((key.to_owned(), value.to_owned()));
    }
    Ok(fields)
}

/// Tracks which fields a handler has consumed.
///
/// Handlers [`take`](Self::take) each field they expect and then call
/// [`finish`](Self::finish), which rejects requests carrying fields the
/// command does not understand.
#[derive(Debug)]
pub struct FieldReader<'a> {
    fields: &'a [(String, String)],
    taken: Vec<bool>,
}

impl<'a> FieldReader<'a> {
    fn new(fields: &'a [(String, String)]) -> Self {
        Self {
            fields,
            taken: vec![false; fields.len()],
        }
    }

    /// Consumes the required field `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Malformed`] when the field is absent.
    pub fn take(&mut self, key: &str) -> Result<&'a str, DispatchError> {
        let fields = self.fields;
        for ((name, value), taken) in fields.iter().zip(self.taken.iter_mut()) {
            if name == key {
                *taken = true;
                return Ok(value.as_str());
            }
        }
        Err(DispatchError::malformed(format!("missing field {key:?}")))
    }

    /// Fails when any field was never consumed.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Malformed`] naming the first leftover field.
    pub fn finish(self) -> Result<(), DispatchError> {
        for ((name, _), taken) in self.fields.iter().zip(self.taken.iter()) {
            if !*taken {
                return Err(DispatchError::malformed(format!(
                    "unexpected field {name:?}"
                )));
            }
        }
        Ok(())
    }
}
