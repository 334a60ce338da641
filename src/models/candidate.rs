use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Candidate {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: u32,
    pub party: String,
    #[serde(rename = "voteCount", default, deserialize_with = "null_as_default")]
    pub vote_count: u64,
}

/// Missing and null both read as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CandidateRequest {
    pub name: String,
    pub age: u32,
    pub party: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mongo_and_plain_ids() {
        let a: Candidate =
            serde_json::from_str(r#"{"_id":"c1","name":"A","age":40,"party":"X","voteCount":3}"#)
                .unwrap();
        let b: Candidate =
            serde_json::from_str(r#"{"id":"c2","name":"B","age":51,"party":"Y"}"#).unwrap();
        assert_eq!(a.id, "c1");
        assert_eq!(a.vote_count, 3);
        assert_eq!(b.id, "c2");
        assert_eq!(b.vote_count, 0);
    }

    #[test]
    fn missing_or_null_age_reads_as_zero() {
        let list: Vec<Candidate> = serde_json::from_str(
            r#"[
                {"_id":"c1","name":"A","party":"X","voteCount":1},
                {"_id":"c2","name":"B","age":null,"party":"Y"},
                {"_id":"c3","name":"C","age":61,"party":"Z"}
            ]"#,
        )
        .unwrap();
        let ages: Vec<u32> = list.iter().map(|c| c.age).collect();
        assert_eq!(ages, vec![0, 0, 61]);
    }
}
