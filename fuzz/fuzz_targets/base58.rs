#![no_main]
// Parses addresses, WIF strings and Base58 signatures
use libfuzzer_sys::fuzz_target;
use skycoin_crypto::{
    address::{AddressKind, decode_address, decode_wif, wif_from_secret_key},
    ecdsa::Signature,
};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for kind in [AddressKind::Native, AddressKind::Bitcoin] {
        let _ = decode_address(text, kind);
    }

    if let Ok(sk) = decode_wif(text) {
        assert_eq!(decode_wif(&wif_from_secret_key(&sk)), Ok(sk));
    }

    if let Ok(sig) = Signature::from_base58(text) {
        assert_eq!(Signature::from_base58(&sig.to_base58()), Ok(sig));
    }
});
