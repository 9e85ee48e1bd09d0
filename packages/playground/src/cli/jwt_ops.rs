//! Token subcommands

use crate::config::PlaygroundConfig;
use hashlab_common::{Error, ErrorKind, ResultExt};
use hashlab_jwt::{Algorithm, ClaimsEditor, Header, issue, verify};
use hashlab_key::{Curve, KeyPair, VerifyingMaterial};
use serde_json::json;
use std::path::Path;

/// `jwt keygen`
pub fn handle_keygen(curve: Curve, use_json: bool) -> hashlab_common::Result<()> {
    let key_pair = KeyPair::generate(curve).map_err(Error::classified)?;
    if use_json {
        println!(
            "{}",
            json!({
                "success": true,
                "operation": "keygen",
                "curve": curve.to_string(),
                "key_id": key_pair.key_id(),
                "public_key": key_pair.public_key(),
                "private_key": key_pair.private_key(),
            })
        );
    } else {
        println!("{}", key_pair.private_key());
        println!("{}", key_pair.public_key());
    }
    Ok(())
}

/// `jwt issue`
pub fn handle_issue(
    claims: Option<&str>,
    private_key_file: Option<&Path>,
    use_json: bool,
) -> hashlab_common::Result<()> {
    let (key_pair, generated) = match private_key_file {
        Some(path) => {
            let pem = read_file(path)?;
            (KeyPair::from_private_pem(&pem).map_err(Error::classified)?, false)
        }
        None => (KeyPair::generate(Curve::P256).map_err(Error::classified)?, true),
    };

    let mut editor = ClaimsEditor::demo(chrono::Utc::now().timestamp());
    if let Some(text) = claims {
        editor.edit_claims(text).map_err(Error::classified)?;
    }

    let algorithm: Algorithm = key_pair
        .curve()
        .jws_algorithm()
        .parse()
        .map_err(Error::classified)?;
    let header = Header {
        algorithm,
        key_id: Some(key_pair.key_id().to_string()),
        ..Header::default()
    };

    let token = issue(editor.claims(), &header, key_pair.private_key()).map_err(Error::classified)?;

    if use_json {
        let mut output = json!({
            "success": true,
            "operation": "issue",
            "algorithm": algorithm.as_str(),
            "token": token,
        });
        if generated {
            output["public_key"] = json!(key_pair.public_key());
        }
        println!("{output}");
    } else {
        println!("{token}");
        if generated {
            println!("{}", key_pair.public_key());
        }
    }
    Ok(())
}

/// `jwt verify`; the key's curve picks the algorithm, and repeated flags
/// replace the configured issuers or audiences
pub fn handle_verify(
    config: &PlaygroundConfig,
    token: &str,
    public_key_file: &Path,
    issuers: Vec<String>,
    audiences: Vec<String>,
    use_json: bool,
) -> hashlab_common::Result<()> {
    let pem = read_file(public_key_file)?;
    let algorithm: Algorithm = VerifyingMaterial::from_pem(&pem)
        .map_err(Error::classified)?
        .curve()
        .jws_algorithm()
        .parse()
        .map_err(Error::classified)?;

    let mut policy = config.verification_policy().with_algorithm(algorithm);
    if !issuers.is_empty() {
        policy = policy.expect_issuers(issuers);
    }
    if !audiences.is_empty() {
        policy = policy.expect_audiences(audiences);
    }

    let claims = verify(token.trim(), &pem, &policy).map_err(Error::classified)?;

    let claims = serde_json::to_value(&claims)
        .map_err(|e| Error::with_source(ErrorKind::Internal, e))?;
    if use_json {
        println!(
            "{}",
            json!({
                "success": true,
                "operation": "verify",
                "verified": true,
                "claims": claims,
            })
        );
    } else {
        println!("Signature verified");
        println!("{claims:#}");
    }
    Ok(())
}

fn read_file(path: &Path) -> hashlab_common::Result<String> {
    std::fs::read_to_string(path)
        .with_context(ErrorKind::UserInput, || format!("cannot read {}", path.display()))
}
