use super::*;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

// y^2 = x^3 + 7 over GF(11): 12 points, contains the 2-torsion point (5, 0).
fn curve11() -> Arc<PrimeCurve> {
    Arc::new(PrimeCurve::new(11u32, 0, 7))
}

// y^2 = x^3 + 2x + 2 over GF(17): prime order 19, no point has y = 0.
fn curve17() -> Arc<PrimeCurve> {
    Arc::new(PrimeCurve::new(17u32, 2, 2))
}

fn all_points(curve: &Arc<PrimeCurve>) -> Vec<Point> {
    let p = curve.prime().to_u64_digits().first().copied().unwrap_or(0);
    let mut points = vec![Point::INFINITY];
    for x in 0..p {
        for y in 0..p {
            let point = Point::affine(x, y, curve).unwrap();
            if point.is_on_curve().unwrap() {
                points.push(point);
            }
        }
    }
    points
}

#[test]
fn test_end_to_end_small_curve() {
    let curve = curve11();
    let p = Point::affine(4, 4, &curve).unwrap();
    assert!(p.is_on_curve().unwrap());

    let p2 = p.mul_u64(2).unwrap();
    let p3 = p.mul_u64(3).unwrap();
    assert_eq!(p2, Point::affine(6, 6, &curve).unwrap());
    assert_eq!(p3, Point::affine(2, 9, &curve).unwrap());
    assert_eq!(p3, (&p + &p2).unwrap());

    let multiples = p.multiples(3).unwrap();
    assert_eq!(multiples, vec![Point::INFINITY, p.clone(), p2, p3]);
    assert_eq!(p.multiples(0).unwrap(), vec![Point::INFINITY]);
}

#[test]
fn test_group_order() {
    let curve = curve11();
    assert_eq!(all_points(&curve).len(), 12);

    // (4, 4) generates the whole group; its multiples cycle with period 12.
    let p = Point::affine(4, 4, &curve).unwrap();
    let multiples = p.multiples(12).unwrap();
    assert_eq!(multiples[12], Point::INFINITY);
    assert_eq!(multiples[6], Point::affine(5, 0, &curve).unwrap());
    for (k, q) in multiples.iter().enumerate().skip(1).take(11) {
        assert!(!q.is_infinity(), "{k}*P should not be the identity");
        assert!(q.is_on_curve().unwrap());
    }

    let g = Point::affine(5, 1, &curve17()).unwrap();
    assert_eq!(g.mul_u64(19).unwrap(), Point::INFINITY);
    assert_eq!(g.scalar_mul_lsb(&19u64).unwrap(), Point::INFINITY);
}

#[test]
fn test_group_laws_on_all_points() {
    for curve in [curve11(), curve17()] {
        let points = all_points(&curve);
        for p in &points {
            // identity and inverse
            assert_eq!((p + &Point::INFINITY).unwrap(), *p);
            assert_eq!((&Point::INFINITY + p).unwrap(), *p);
            assert_eq!((p + &(-p)).unwrap(), Point::INFINITY);
            assert_eq!(-(-p.clone()), *p);

            if let Some(y) = p.y() {
                if !y.is_zero() {
                    assert_eq!((p + p).unwrap(), p.double().unwrap());
                }
            }

            for q in &points {
                let sum = (p + q).unwrap();
                assert_eq!(sum, (q + p).unwrap());
                assert!(sum.is_on_curve().unwrap());
            }
        }
    }
}

#[test]
fn test_associativity_on_prime_order_curve() {
    let points = all_points(&curve17());
    for p in &points {
        for q in &points {
            for r in points.iter().step_by(3) {
                let left = (&(p + q).unwrap() + r).unwrap();
                let right = (p + &(q + r).unwrap()).unwrap();
                assert_eq!(left, right);
            }
        }
    }
}

#[test]
fn test_scalar_mul_algorithms_agree() {
    let points = all_points(&curve17());
    for p in &points {
        for k in 0u64..64 {
            assert_eq!(
                p.scalar_mul(&k).unwrap(),
                p.scalar_mul_lsb(&k).unwrap(),
                "k = {k}, P = {p}"
            );
        }
    }
}

#[test]
fn test_scalar_mul_odd_even_chains() {
    // Multipliers whose halving alternates between odd and even steps.
    let g = Point::affine(5, 1, &curve17()).unwrap();
    let table = g.multiples(18).unwrap();
    for k in [5u64, 10, 11, 13, 21, 42, 85, 170, 341, 682, 1365] {
        let expected = &table[(k % 19) as usize];
        assert_eq!(g.scalar_mul(&k).unwrap(), *expected, "k = {k}");
        assert_eq!(g.scalar_mul_lsb(&k).unwrap(), *expected, "k = {k}");
    }
}

#[test]
fn test_scalar_mul_edge_multipliers() {
    for p in all_points(&curve11()) {
        assert_eq!(p.scalar_mul(&0u64).unwrap(), Point::INFINITY);
        assert_eq!(p.scalar_mul_lsb(&0u64).unwrap(), Point::INFINITY);
        assert_eq!(p.scalar_mul(&1u64).unwrap(), p);
        assert_eq!(p.scalar_mul_lsb(&1u64).unwrap(), p);
    }
    assert_eq!(Point::INFINITY.mul_u64(12345).unwrap(), Point::INFINITY);
    assert_eq!(
        Point::INFINITY.scalar_mul_lsb(&12345u64).unwrap(),
        Point::INFINITY
    );
}

#[test]
fn test_scalar_mul_distributes() {
    let mut rng = StdRng::seed_from_u64(42);
    let points = all_points(&curve17());
    for _ in 0..200 {
        let p = &points[rng.random_range(0..points.len())];
        let j: u64 = rng.random_range(0..1000);
        let k: u64 = rng.random_range(0..1000);

        let left = p.mul_u64(j + k).unwrap();
        let right = (&p.mul_u64(j).unwrap() + &p.mul_u64(k).unwrap()).unwrap();
        assert_eq!(left, right);
    }
}

#[test]
fn test_multiples_match_scalar_mul() {
    let curve = curve17();
    for p in all_points(&curve) {
        let table = p.multiples(25).unwrap();
        assert_eq!(table.len(), 26);
        for (k, q) in table.iter().enumerate() {
            assert_eq!(p.mul_u64(k as u64).unwrap(), *q);
        }
    }
}

#[test]
fn test_multiples_through_two_torsion() {
    // Repeated addition never doubles a point with y = 0.
    let curve = curve11();
    let t = Point::affine(5, 0, &curve).unwrap();
    let table = t.multiples(4).unwrap();
    assert_eq!(
        table,
        vec![
            Point::INFINITY,
            t.clone(),
            Point::INFINITY,
            t.clone(),
            Point::INFINITY
        ]
    );
}

#[test]
fn test_two_torsion_in_scalar_mul() {
    // 6*(4, 4) = (5, 0). MSB-first doubles 6P for k = 12 and fails; LSB-first
    // only doubles P, 2P and 4P and succeeds.
    let p = Point::affine(4, 4, &curve11()).unwrap();
    assert!(matches!(
        p.scalar_mul(&12u64),
        Err(CurveError::DivisionByZero { .. })
    ));
    assert_eq!(p.scalar_mul_lsb(&12u64).unwrap(), Point::INFINITY);

    // Both reach the 2-torsion point itself without doubling it.
    let t = Point::affine(5, 0, &curve11()).unwrap();
    assert_eq!(p.mul_u64(6).unwrap(), t);
    assert_eq!(p.scalar_mul_lsb(&6u64).unwrap(), t);
}

#[test]
fn test_operator_scalar_mul() {
    let curve = curve11();
    let p = Point::affine(4, 4, &curve).unwrap();
    assert_eq!((&p * 3u64).unwrap(), Point::affine(2, 9, &curve).unwrap());
    assert_eq!((&p * &BigUint::from(3u32)).unwrap(), (&p * 3u64).unwrap());
}

#[test]
fn test_secp256k1_scalar_mul() {
    let (_, g) = secp256k1().unwrap();
    let order = secp256k1_order();

    assert_eq!(g.scalar_mul(&order).unwrap(), Point::INFINITY);
    assert_eq!(g.scalar_mul_lsb(&order).unwrap(), Point::INFINITY);

    let g2 = g.double().unwrap();
    let expected_x = BigUint::parse_bytes(
        b"c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        16,
    )
    .unwrap();
    assert_eq!(g2.x().unwrap().value(), &expected_x);

    let mut rng = StdRng::seed_from_u64(7);
    let k = BigUint::from(rng.random::<u64>()) << 64u32 | BigUint::from(rng.random::<u64>());
    let left = g.scalar_mul(&k).unwrap();
    assert_eq!(left, g.scalar_mul_lsb(&k).unwrap());
    assert!(left.is_on_curve().unwrap());

    // (n - 1)*G = -G
    let minus_one = &order - BigUint::from(1u32);
    assert_eq!(g.scalar_mul(&minus_one).unwrap(), -&g);
}

#[test]
fn test_point_serde() {
    let curve = curve11();
    let p = Point::affine(4, 4, &curve).unwrap();
    let json = serde_json::to_string(&p).unwrap();
    let back: Point = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
    assert_eq!(back.curve().map(|c| c.as_ref()), Some(curve.as_ref()));

    let lift = p.compute_lift().unwrap();
    let back: Lift = serde_json::from_str(&serde_json::to_string(&lift).unwrap()).unwrap();
    assert_eq!(back, lift);
}
