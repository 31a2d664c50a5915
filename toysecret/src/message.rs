//! Message box shared by the two parties.

use crate::{Error, Result, SymmetricKey, fernet};

const NO_MESSAGE: Error = Error::MissingInput("no message");

/// Text a party is composing, has received, or has decrypted.
///
/// Encrypting and decrypting replace the text in place. A failed operation
/// leaves the text as it was, so the caller can show it next to the error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageBox {
    text: Option<String>,
}

impl MessageBox {
    /// Box holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Current text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the text with one received from the other party.
    pub fn receive(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Take the text out, leaving the box empty.
    pub fn take(&mut self) -> Option<String> {
        self.text.take()
    }

    /// Replace the text with its Fernet token under `key`.
    pub fn encrypt(&mut self, key: Option<&SymmetricKey>) -> Result<&str> {
        let key = key.ok_or(Error::MissingInput("encrypting needs a shared secret"))?;
        let text = self.text.as_deref().ok_or(NO_MESSAGE)?;

        let token = fernet::encrypt(key, text)?;
        Ok(self.text.insert(token).as_str())
    }

    /// Replace a Fernet token with the text it decrypts to under `key`.
    pub fn decrypt(&mut self, key: Option<&SymmetricKey>) -> Result<&str> {
        let key = key.ok_or(Error::MissingInput("decrypting needs a shared secret"))?;
        let token = self.text.as_deref().ok_or(NO_MESSAGE)?;

        let text = fernet::decrypt(key, token)?;
        Ok(self.text.insert(text).as_str())
    }
}
