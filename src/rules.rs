//! Static lookup tables driving the engine: the number-word vocabulary, the
//! targeted repair patterns derived from it, and the operation keyword
//! families.

pub(crate) mod numeral {
    pub(crate) mod repairs;
    pub(crate) mod words;

    #[cfg(test)]
    mod tests;
}

pub(crate) mod operation {
    pub(crate) mod keywords;

    #[cfg(test)]
    mod tests;
}
