#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use kumiki_x509::deprecation::{self, Deprecation};
use kumiki_x509::{Backend, HashAlgorithm, TbsCertList};

pub fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Run `f` and count the deprecation notices it emits.
pub fn count_deprecations<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let result = deprecation::with_hook(
        move |_: &Deprecation| counter.set(counter.get() + 1),
        f,
    );
    (result, count.get())
}

#[derive(Debug, thiserror::Error)]
#[error("key {0} is not loaded")]
pub struct UnknownKey(pub String);

#[derive(Debug)]
pub struct SignedCrl {
    pub tbs: TbsCertList,
    pub key: String,
    pub algorithm: Option<HashAlgorithm>,
}

/// Accepts only the key named "ca-key" and echoes what it was given.
#[derive(Debug, Default)]
pub struct FakeBackend;

impl Backend for FakeBackend {
    type PrivateKey = str;
    type Signed = SignedCrl;
    type Error = UnknownKey;

    fn sign_crl(
        &self,
        tbs: &TbsCertList,
        key: &str,
        algorithm: Option<HashAlgorithm>,
    ) -> Result<SignedCrl, UnknownKey> {
        if key != "ca-key" {
            return Err(UnknownKey(key.to_string()));
        }
        Ok(SignedCrl {
            tbs: tbs.clone(),
            key: key.to_string(),
            algorithm,
        })
    }
}
