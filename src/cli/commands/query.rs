//! Query command - Answer a raw request the way a game client would see it

use anyhow::{Context, Result};
use clap::Parser;

use crate::protocol;

#[derive(Parser, Debug)]
#[command(about = "Answer a query-string move request")]
pub struct QueryArgs {
    /// Request, e.g. "n=3&currentPlayer=1&board=000+010+...&AI=AI1"
    pub query: String,

    /// Include the per-move scores in the response
    #[arg(long)]
    pub scores: bool,
}

pub fn execute(args: QueryArgs) -> Result<()> {
    println!("{}", answer(&args)?);
    Ok(())
}

/// The JSON body for the request
pub fn answer(args: &QueryArgs) -> Result<String> {
    let response = protocol::respond(&args.query, args.scores)
        .with_context(|| format!("failed to answer '{}'", args.query))?;
    Ok(response.to_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_is_json() {
        let args = QueryArgs {
            query: "n=3&currentPlayer=1&board=001+011+020+102+112+120+200+210+220&AI=AI2"
                .to_string(),
            scores: false,
        };
        let value: serde_json::Value = serde_json::from_str(&answer(&args).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "move": "02" }));
    }

    #[test]
    fn test_bad_query_is_reported() {
        let args = QueryArgs {
            query: "n=3".to_string(),
            scores: true,
        };
        let err = answer(&args).unwrap_err();
        assert!(err.to_string().contains("failed to answer"));
    }
}
