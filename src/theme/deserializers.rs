use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

pub fn de_pixels<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.trim().parse::<u32>() {
                Ok(pixels) => Ok(pixels),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrInt::Int(pixels) => Ok(pixels),
    }
}

pub fn de_pixel_list<'de, D>(deserializer: D) -> Result<SmallVec<[u32; 8]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SmallVec::<[StringOrInt; 8]>::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom("list can't be empty."));
    }

    value
        .into_iter()
        .map(|entry| match entry {
            StringOrInt::Int(pixels) => Ok(pixels),
            StringOrInt::String(string) => string
                .strip_suffix("px")
                .and_then(|string| string.trim().parse::<u32>().ok())
                .ok_or_else(|| D::Error::custom("expected u32 or string ending with 'px'")),
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    String(String),
    Int(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Pixels {
        #[serde(deserialize_with = "de_pixels")]
        value: u32,
    }

    #[derive(Deserialize)]
    struct PixelList {
        #[serde(deserialize_with = "de_pixel_list")]
        values: SmallVec<[u32; 8]>,
    }

    #[test]
    fn test_pixels_from_number_or_string() {
        let number: Pixels = serde_json::from_str(r#"{"value": 768}"#).unwrap();
        assert_eq!(number.value, 768);

        let string: Pixels = serde_json::from_str(r#"{"value": "768px"}"#).unwrap();
        assert_eq!(string.value, 768);
    }

    #[test]
    fn test_pixels_rejects_other_units() {
        assert!(serde_json::from_str::<Pixels>(r#"{"value": "48rem"}"#).is_err());
        assert!(serde_json::from_str::<Pixels>(r#"{"value": "wide"}"#).is_err());
    }

    #[test]
    fn test_pixel_list() {
        let list: PixelList = serde_json::from_str(r#"{"values": [0, "4px", 8]}"#).unwrap();
        assert_eq!(list.values.as_slice(), &[0, 4, 8]);

        assert!(serde_json::from_str::<PixelList>(r#"{"values": []}"#).is_err());
    }
}
