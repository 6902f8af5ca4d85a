#[cfg(test)]
mod integration_tests {
    use math::radix;
    use num_bigint::{BigInt, BigUint};
    use num_traits::ToPrimitive;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use recovery_core::{
        cross_validate_with, recover, recover_secret, render_report, Backend,
        BigRational, Method, RecoveryError, Result, ShareSet,
    };
    use serde_json::{json, Map, Value};

    const TEST1: &str = include_str!("../fixtures/test1.json");
    const TEST2: &str = include_str!("../fixtures/test2.json");

    fn test2_secret() -> BigInt {
        "-6290016743746469796".parse().unwrap()
    }

    #[test]
    fn sample_document_recovers_three() -> Result<()> {
        let shares = ShareSet::from_json(TEST1)?;
        assert_eq!(shares.config().degree(), 2);
        for backend in Backend::ALL {
            let recovery = recover(&shares, backend, Method::Newton)?;
            assert_eq!(recovery.secret, BigInt::from(3));
            assert!(recovery.validation.agree());
            // share 6 is beyond n = 4
            assert_eq!(recovery.points.len(), 3);
        }
        Ok(())
    }

    #[test]
    fn large_document_is_exact_on_the_rational_backend() -> Result<()> {
        let shares = ShareSet::from_json(TEST2)?;
        let recovery = recover_secret::<BigRational>(&shares)?;
        assert_eq!(recovery.points.len(), 10);
        assert_eq!(recovery.selected().len(), 7);
        assert!(recovery.validation.agree());
        assert_eq!(recovery.secret, test2_secret());

        let all = cross_validate_with::<BigRational>(recovery.selected(), &Method::ALL)?;
        assert!(all.agree());
        assert_eq!(all.get(Method::Lagrange), Some(&test2_secret()));
        Ok(())
    }

    #[test]
    fn float_backend_is_close_on_the_large_document() -> Result<()> {
        let shares = ShareSet::from_json(TEST2)?;
        let recovery = recover(&shares, Backend::Float, Method::Newton)?;
        let exact = test2_secret().to_f64().unwrap();
        let approx = recovery.secret.to_f64().unwrap();
        assert!(((approx - exact) / exact).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn report_renders_for_both_fixtures() -> Result<()> {
        for input in [TEST1, TEST2] {
            let recovery = recover(&ShareSet::from_json(input)?, Backend::Exact, Method::Newton)?;
            let text = render_report(&recovery, Backend::Exact)?;
            assert!(text.contains("NEWTON'S DIVIDED DIFFERENCES"));
            assert!(text.contains("All methods agree: YES"));
            assert!(text.contains(&format!("is {}", recovery.secret)));
        }
        Ok(())
    }

    #[test]
    fn invalid_digit_fails_the_document() {
        let shares = ShareSet::from_value(json!({
            "keys": { "n": 2, "k": 2 },
            "1": { "base": "10", "value": "1a" },
            "2": { "base": "10", "value": "7" }
        }))
        .unwrap();
        assert_eq!(
            recover_secret::<BigRational>(&shares),
            Err(RecoveryError::InvalidDigit { digit: 'a', base: 10 })
        );
    }

    #[test]
    fn missing_shares_leave_too_few_points() {
        let shares = ShareSet::from_value(json!({
            "keys": { "n": 5, "k": 3 },
            "2": { "base": "10", "value": "7" },
            "5": { "base": "10", "value": "28" }
        }))
        .unwrap();
        assert_eq!(
            recover_secret::<f64>(&shares),
            Err(RecoveryError::InsufficientPoints {
                required: 3,
                available: 2
            })
        );
    }

    #[test]
    fn chosen_answer_method_does_not_change_the_secret() -> Result<()> {
        let shares = ShareSet::from_json(TEST2)?;
        for method in Method::ALL {
            assert_eq!(
                recover(&shares, Backend::Exact, method)?.secret,
                test2_secret()
            );
        }
        Ok(())
    }

    /// Sample a random polynomial with non-negative coefficients, publish its
    /// values in random bases and recover the constant term exactly.
    #[test]
    fn random_documents_round_trip_through_the_decoder() -> Result<()> {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        for _ in 0..32 {
            let k = rng.random_range(1..=8usize);
            let n = k + rng.random_range(0..=3usize);
            let coefficients: Vec<BigUint> = (0..k)
                .map(|_| BigUint::from(rng.random::<u64>()) * rng.random::<u64>())
                .collect();

            let mut document = Map::new();
            document.insert("keys".into(), json!({ "n": n, "k": k.to_string() }));
            for x in 1..=n as u64 {
                let y = coefficients
                    .iter()
                    .rev()
                    .fold(BigUint::from(0u8), |acc, c| acc * x + c);
                let base = rng.random_range(2..=36u32);
                let mut value = radix::encode(&y, base)?;
                if rng.random_bool(0.5) {
                    value = value.to_uppercase();
                }
                document.insert(
                    x.to_string(),
                    json!({ "base": base.to_string(), "value": value }),
                );
            }
            document.insert(
                (n + 1).to_string(),
                json!({ "base": "10", "value": "not a share" }),
            );

            let shares = ShareSet::from_value(Value::Object(document))?;
            let recovery = recover_secret::<BigRational>(&shares)?;
            assert!(recovery.validation.agree());
            assert_eq!(recovery.secret, BigInt::from(coefficients[0].clone()));
        }
        Ok(())
    }
}
