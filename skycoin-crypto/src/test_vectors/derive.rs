//! Chained key derivation test vectors

use hex_literal::hex;

/// One derivation step from a seed: the seed hash that becomes the next
/// seed, and the keypair produced at this position.
pub struct DeriveVector {
    /// Seed bytes.
    pub seed: &'static [u8],
    /// Seed hash, the next seed in the chain.
    pub next_seed: [u8; 32],
    /// Secret key.
    pub secret: [u8; 32],
    /// Compressed public key.
    pub public: [u8; 33],
}

/// Single steps of the chain.
pub const DERIVE_TEST_VECTORS: &[DeriveVector] = &[
    DeriveVector {
        seed: b"seed",
        next_seed: hex!("c79454cf362b3f55e5effce09f664311650a44b9c189b3c8eed1ae9bd696cd9e"),
        secret: hex!("001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7"),
        public: hex!("02e5be89fa161bf6b0bc64ec9ec7fe27311fbb78949c3ef9739d4c73a84920d6e1"),
    },
    DeriveVector {
        seed: b"random_seed",
        next_seed: hex!("5e81d46f56767496bc05ed177c5237cd4fe5013e617c726af43e1cba884f17d1"),
        secret: hex!("ff671860c58aad3f765d8add25046412dabf641186472e1553435e6e3c4a6fb0"),
        public: hex!("030e40dda21c27126d829b6ae57816e1440dcb2cc73e37e860af26eff1ec55ed73"),
    },
    DeriveVector {
        seed: b"hello seed",
        next_seed: hex!("70d382540812d4abc969dcc2adc66e805db96f7e1dcbe1ae6bbf2878211cbcf6"),
        secret: hex!("84fdc649964bf299a787cb78cd975910e197dbddd7db776ece544f41c44b3056"),
        public: hex!("035843e72258696b391cf1d898fc65f31e66876ea0c9e101f8ddc3ebb4b87dc5b0"),
    },
    DeriveVector {
        seed: b"skycoin5",
        next_seed: hex!("c926f1544f3b1eb91e53d13cbd45273a232974311de575b9268c5a7d2ab61f31"),
        secret: hex!("c89b70a1f7b960c08068de9f2d3b32287833b26372935aa5042f7cc1dc985335"),
        public: hex!("03b17c7b7c564385be66f9c1b9da6a0b5aea56f0cb70548e6528a2f4f7b27245d8"),
    },
];
