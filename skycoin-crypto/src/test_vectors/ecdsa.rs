//! ECDSA/secp256k1 test vectors

use hex_literal::hex;

/// Signing vector: secret key, nonce and digest, with the expected compact
/// signature and the public key it recovers to.
pub struct SignVector {
    /// Secret key.
    pub d: [u8; 32],
    /// Nonce.
    pub k: [u8; 32],
    /// Message digest.
    pub m: [u8; 32],
    /// `r || s || recovery id`.
    pub sig: [u8; 65],
    /// Compressed public key.
    pub q: [u8; 33],
}

/// Recovery vector: a digest and compact signature with the signer's
/// compressed public key.
pub struct RecoverVector {
    /// Message digest.
    pub m: [u8; 32],
    /// `r || s || recovery id`.
    pub sig: [u8; 65],
    /// Compressed public key.
    pub q: [u8; 33],
}

/// Signatures produced with explicit nonces.
pub const SIGN_TEST_VECTORS: &[SignVector] = &[
    SignVector {
        d: hex!("597e27368656cab3c82bfcf2fb074cefd8b6101781a27709ba1b326b738d2c5a"),
        k: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        m: hex!("001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7"),
        sig: hex!(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
            "04641a7472bb90647fa60b4d30aef8c7279e4b68226f7b2713dab712ef122f8b"
            "01"
        ),
        q: hex!("02df09821cff4874198a1dbdc462d224bd99728eeed024185879225762376132c7"),
    },
    SignVector {
        d: hex!("597e27368656cab3c82bfcf2fb074cefd8b6101781a27709ba1b326b738d2c5a"),
        k: hex!("000000000000000000000000000000000000000000000000000000000000fe25"),
        m: hex!("001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7"),
        sig: hex!(
            "ee38f27be5f3c4b8db875c0ffbc0232e93f622d16ede888508a4920ab51c3c99"
            "06ea7426c5e251e4bea76f06f554fa7798a49b7968b400fa981c51531a5748d8"
            "01"
        ),
        q: hex!("02df09821cff4874198a1dbdc462d224bd99728eeed024185879225762376132c7"),
    },
    SignVector {
        d: hex!("597e27368656cab3c82bfcf2fb074cefd8b6101781a27709ba1b326b738d2c5a"),
        k: hex!("00000000000000000000000000000000000000000000000000000000fe250100"),
        m: hex!("001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7"),
        sig: hex!(
            "d4d869ad39cb3a64fa1980b47d1f19bd568430d3f929e01c00f1e5b7c6840ba8"
            "5e08d5781986ee72d1e8ebd4dd050386a64eee0256005626d2acbe3aefee9e25"
            "00"
        ),
        q: hex!("02df09821cff4874198a1dbdc462d224bd99728eeed024185879225762376132c7"),
    },
    SignVector {
        d: hex!("67a331669081d22624f16512ea61e1d44cb3f26af3333973d17e0e8d03733b78"),
        k: hex!("000000000000000000000000000000000000000000000000000000001e2501ac"),
        m: hex!("001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7"),
        sig: hex!(
            "eeee743d79b40aaa52d9eeb48791b0ae81a2f425bf99cdbc84180e8ed429300d"
            "457e8d669dbff1716b123552baf6f6f0ef67f16c1d9ccd44e6785d4240022126"
            "01"
        ),
        q: hex!("0270b763664593c5f84dfb20d23ef79530fc317e5ee2ece0d9c50f432f62426ff9"),
    },
    SignVector {
        d: hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
        k: hex!("49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a"),
        m: hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"),
        sig: hex!(
            "241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"
            "021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e"
            "00"
        ),
        q: hex!("03779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
    },
];

/// Signatures checked with trailing zero bytes stripped from the digest.
///
/// Several digests are short texts zero-padded to 32 bytes, which only
/// recover to the listed key under that rule.
pub const RECOVER_TEST_VECTORS: &[RecoverVector] = &[
    RecoverVector {
        // "Hello World!"
        m: hex!("48656c6c6f20576f726c64210000000000000000000000000000000000000000"),
        sig: hex!(
            "abc30130e2d9561fa8eb9871b75b13100689937dfc41c98d611b985ca25258c9"
            "60be25c0b45874e1255f053863f6e175300d7e788d8b93d6dcfa9377120e4d35"
            "00"
        ),
        q: hex!("02e5be89fa161bf6b0bc64ec9ec7fe27311fbb78949c3ef9739d4c73a84920d6e1"),
    },
    RecoverVector {
        // "Hello World, it's me!"
        m: hex!("48656c6c6f20576f726c642c2069742773206d65210000000000000000000000"),
        sig: hex!(
            "54d7572cf5066225f349d89ad6d19e19e64d14711083f6607258b37407e5f0d2"
            "6c6328d7c3ecb31eb4132f6b983f8ec33cdf3664c1df617526bbac140cdac75b"
            "01"
        ),
        q: hex!("02e5be89fa161bf6b0bc64ec9ec7fe27311fbb78949c3ef9739d4c73a84920d6e1"),
    },
    RecoverVector {
        // "This msg has 24 letters."
        m: hex!("54686973206d736720686173203234206c6574746572732e0000000000000000"),
        sig: hex!(
            "eff089c10e4c8d3c7244a8bc75d5657153ec7b42ed6d01bcc75cd08271a4aa7c"
            "19d1bd3b60330c909600238c1f18d99f06d2573c27cb4f2dfb0f65666a5a5232"
            "00"
        ),
        q: hex!("02df09821cff4874198a1dbdc462d224bd99728eeed024185879225762376132c7"),
    },
    RecoverVector {
        // "This msg has 32 characters: max."
        m: hex!("54686973206d73672068617320333220636861726163746572733a206d61782e"),
        sig: hex!(
            "e092ce21dda29349bd1e4e8b7a26d701542ac972b4e319a60bd887b6e5185362"
            "2300e4e847f01a9aff4f51caa969759f717a6e5439b6bc4a5305b10bab9b5cb2"
            "01"
        ),
        q: hex!("02df09821cff4874198a1dbdc462d224bd99728eeed024185879225762376132c7"),
    },
    RecoverVector {
        m: hex!("176b81623cf98f45879f3a48fa34af77dde44b2ffa0ddd2bf9edb386f76ec0ef"),
        sig: hex!(
            "864c6abf85214be99fed3dc37591a74282f566fb52fb56ab21dabc0d120f29b8"
            "48ffeb52a7843a49c411753c0edc12c0dedf6313266722bee982a0d3b384b626"
            "00"
        ),
        q: hex!("03b17c7b7c564385be66f9c1b9da6a0b5aea56f0cb70548e6528a2f4f7b27245d8"),
    },
    RecoverVector {
        m: hex!("176b81623cf98f45879f3a48fa34af77dde44b2ffa0ddd2bf9edb386f76ec0ef"),
        sig: hex!(
            "631182b9722489eedd1a9eab36bf776c3e679aa2b1bd3fb346db0f776b982be2"
            "5bdd33d4e893aca619eff3013e087307d22ca30644c96ea0fbdef06396d1bf96"
            "00"
        ),
        q: hex!("039f12c93645e35e5274dc38f191be0b6d1321ec35d2d2a3ddf7d13ed12f6da85b"),
    },
    RecoverVector {
        m: hex!("176b81623cf98f45879f3a48fa34af77dde44b2ffa0ddd2bf9edb386f76ec0ef"),
        sig: hex!(
            "d2a8ec2b29ce3cf3e6048296188adff4b5dfcb337c1d1157f28654e445bb940b"
            "4e47d6b0c7ba43d072bf8618775f123a435e8d1a150cb39bbb1aa80da8c57ea1"
            "00"
        ),
        q: hex!("03338ffc0ff42df07d27b0b4131cd96ffdfa4685b5566aafc7aa71ed10fd1cbd6f"),
    },
];
