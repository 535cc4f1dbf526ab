use anyhow::Result;
use byte_encoders::{Base64, Encoder, EncodingError, Hex};
use rand::Rng;

fn random_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn test_base64_round_trip() -> Result<()> {
    for _ in 0..100 {
        let blob = random_blob();
        let encoded = Base64.encode(Some(blob.as_slice()));
        let decoded = Base64.decode(encoded.as_deref())?;
        assert_eq!(Some(blob), decoded);
    }
    Ok(())
}

#[test]
fn test_base64_encoded_length() {
    for _ in 0..100 {
        let blob = random_blob();
        let encoded = Base64.encode(Some(blob.as_slice())).unwrap();
        assert_eq!(0, encoded.len() % 4);
        assert_eq!((blob.len() + 2) / 3 * 4, encoded.len());

        // Padding only ever appears as the final 0, 1 or 2 characters
        let trimmed = encoded.trim_end_matches('=');
        assert!(encoded.len() - trimmed.len() <= 2);
        assert!(!trimmed.contains('='));
    }
}

#[test]
fn test_hex_round_trip() -> Result<()> {
    for _ in 0..100 {
        let blob = random_blob();
        let encoded = Hex.encode(Some(blob.as_slice()));
        assert_eq!(2 * blob.len(), encoded.as_deref().unwrap().len());
        let decoded = Hex.decode(encoded.as_deref())?;
        assert_eq!(Some(blob), decoded);
    }
    Ok(())
}

#[test]
fn test_swapping_encoders_at_call_site() -> Result<()> {
    let encoders: Vec<Box<dyn Encoder>> = vec![Box::new(Base64), Box::new(Hex)];
    for encoder in &encoders {
        for _ in 0..20 {
            let blob = random_blob();
            let encoded = encoder.encode(Some(blob.as_slice()));
            let decoded = encoder.decode(encoded.as_deref())?;
            assert_eq!(Some(blob), decoded);
        }

        // The None passthrough holds for every encoder, with no error raised
        assert_eq!(None, encoder.encode(None));
        assert_eq!(None, encoder.decode(None)?);
    }
    Ok(())
}

#[test]
fn test_malformed_input_propagates() {
    let encoders: Vec<Box<dyn Encoder>> = vec![Box::new(Base64), Box::new(Hex)];
    for encoder in &encoders {
        let result = encoder.decode(Some("not base64 !!"));
        assert!(matches!(result, Err(EncodingError::InvalidEncoding(_))));
    }
}
