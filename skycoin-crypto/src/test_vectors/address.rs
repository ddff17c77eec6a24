//! Address and WIF test vectors

use hex_literal::hex;

/// A compressed public key with its native and Bitcoin addresses.
pub struct AddressVector {
    /// Compressed public key.
    pub public: [u8; 33],
    /// Native address.
    pub native: &'static str,
    /// Bitcoin P2PKH address.
    pub bitcoin: &'static str,
}

/// Addresses for public keys.
pub const ADDRESS_TEST_VECTORS: &[AddressVector] = &[
    AddressVector {
        public: hex!("02e5be89fa161bf6b0bc64ec9ec7fe27311fbb78949c3ef9739d4c73a84920d6e1"),
        native: "2EVNa4CK9SKosT4j1GEn8SuuUUEAXaHAMbM",
        bitcoin: "1CN7JTzTTpmh1dsHeUSosXmNL2GLTwt78g",
    },
    AddressVector {
        public: hex!("030e40dda21c27126d829b6ae57816e1440dcb2cc73e37e860af26eff1ec55ed73"),
        native: "2EKq1QXRmfe7jsWzNdYsmyoz8q3VkwkLsDJ",
        bitcoin: "1DkKGd1YV9nhBKHWT9Aa2JzbEus98y6oU9",
    },
    AddressVector {
        public: hex!("035843e72258696b391cf1d898fc65f31e66876ea0c9e101f8ddc3ebb4b87dc5b0"),
        native: "5UgkXRHrf5XRk41BFq1DVyeFZHTQXirhUu",
        bitcoin: "1Ba2hpHH2o6H1NSrFpJTz5AbxdB2BdK5L2",
    },
    AddressVector {
        public: hex!("0244350faa76799fec03de2f324acd077fd1b686c3a89babc0ef47096ccc5a13fa"),
        native: "AwSeXNwxTavL2pLvErpyMMg2ekgo3nHYde",
        bitcoin: "1LQzF7ph4DkrZjsa7VxzBXuoCX9X7cQELa",
    },
];

/// A secret key with its WIF encoding.
pub struct WifVector {
    /// Secret key.
    pub secret: [u8; 32],
    /// Compressed-key WIF string.
    pub wif: &'static str,
}

/// WIF encodings for secret keys.
pub const WIF_TEST_VECTORS: &[WifVector] = &[
    WifVector {
        secret: hex!("001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7"),
        wif: "KwDuvkABDqb4WQiwc92DpXtBBiEywuKv46ZUvz5Gi5Xyn9gbcTJt",
    },
    WifVector {
        secret: hex!("ff671860c58aad3f765d8add25046412dabf641186472e1553435e6e3c4a6fb0"),
        wif: "L5nBR59QkW6kyXFvyqNbncWo2jPMoBXSH9fGUkh3n2RQn5Mj3vfY",
    },
    WifVector {
        secret: hex!("84fdc649964bf299a787cb78cd975910e197dbddd7db776ece544f41c44b3056"),
        wif: "L1gEDGuLTpMjybHnsJ24bUHhueocDrrKVdM3rj1rqXFHfyM2WtwD",
    },
];
