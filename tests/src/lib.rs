//! End-to-end checks over share documents.

#[cfg(test)]
mod integration;
