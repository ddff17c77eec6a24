//! ECDH test vectors

use hex_literal::hex;

/// Secret key, remote public key, and `SHA256` of the compressed shared point.
pub struct EcdhVector {
    /// Local secret key.
    pub secret: [u8; 32],
    /// Remote compressed public key.
    pub public: [u8; 33],
    /// Shared secret.
    pub shared: [u8; 32],
}

/// Hashed shared secrets.
pub const ECDH_TEST_VECTORS: &[EcdhVector] = &[
    EcdhVector {
        secret: hex!("8f609a12bdfc8572590c66763bb05ce609cc0fdcd0c563067e91c06bfd5f1027"),
        public: hex!("03008fa0a5668a567cb28ab45e4b6747f5592690c1d519c860f748f6762fa13103"),
        shared: hex!("907d3c524abb561a80644cdb0cf48e6c71ce33ed6a2d5eed40a771bcf86bd081"),
    },
    EcdhVector {
        secret: hex!("ec4c3702ae8dc5d3aaabc230d362f1ccc1ad2222353d006a057969bf2cc749c1"),
        public: hex!("03b5d8432d20e55590b3e1e74a86f4689a5c1f5e25cc58840741fe1ac044d5e65c"),
        shared: hex!("c59b456353d0fbceadc06d7794c42ebf413ab952b29ecf6052d30c7c1a50acda"),
    },
    EcdhVector {
        secret: hex!("19adca686f1ca7befc30af65765597a4d033ac7479850e79cef3ce5cb5b95da4"),
        public: hex!("0328bd053c69d9c3dd1e864098e503de9839e990c63c48d8a4d6011c423658c4a9"),
        shared: hex!("1fd2c655bcf19202ee004a3e0ae8f5c64ad1c0ce3b69f32ba18da188bb4d1eea"),
    },
    EcdhVector {
        secret: hex!("085d62c27a37889e02a183ee29962d5f4377831b4a70834ccea24a209e201404"),
        public: hex!("030684d74471053ac6395ef74a86f88daa25f501329734c837c8c79c600423b220"),
        shared: hex!("4225281b8498f05e0eaac02be79ce72471c2ddd8c127908b1f717bf64177b287"),
    },
    EcdhVector {
        secret: hex!("3c4289a9d884f74bd05c352fa1c08ce0d65955b59b24a572f46e02807dd42e62"),
        public: hex!("0223496e9caa207e0f8cc283e970b85f2831732d5e0be2bcf9fa366f7e064a25dd"),
        shared: hex!("70e5d568b31ed601fcb7f3144888d0633938817ae85417de1fbd0d52e29b5d7c"),
    },
    EcdhVector {
        secret: hex!("a7e130694166cdb95b1e1bbce3f21e4dbd63f46df42b48c5a1f8295033d57d04"),
        public: hex!("02683e90daa5b0dd195b69e01386390284d3b3723121ce213771d9a0815d12b86c"),
        shared: hex!("9ab65c0e99605712aac66be1eccccb6dacb867ebaf2b1ebf96d3d92524f247fd"),
    },
];
