use backprop::{metrics, Domain, Network, Trainer};

use ndarray::arr1;
use ndarray_rand::rand::{rngs::StdRng, Rng, SeedableRng};

fn two_region_domain() -> Domain<&'static str> {
    Domain::new(vec![
        ("A", vec![(0.0, 0.4999999), (0.0, 0.4999999)]),
        ("B", vec![(0.5, 1.0), (0.5, 1.0)]),
    ])
    .unwrap()
}

fn evaluate(
    network: &mut Network,
    domain: &Domain<&'static str>,
    samples: usize,
    rng: &mut impl Rng,
) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut y_true = Vec::with_capacity(samples);
    let mut y_pred = Vec::with_capacity(samples);
    for _ in 0..samples {
        let pattern = domain.sample(rng);
        let (_, label) = network.predict(pattern.vector.view(), domain);
        y_true.push(pattern.class_label);
        y_pred.push(label);
    }
    (y_true, y_pred)
}

#[test]
fn learns_to_separate_two_regions() {
    let domain = two_region_domain();
    let mut rng = StdRng::seed_from_u64(7);

    let mut network = Trainer::new(&[4, 1])
        .learning_rate(0.3)
        .iterations(10_000)
        .train(&domain, &mut rng)
        .unwrap();

    let (y_true, y_pred) = evaluate(&mut network, &domain, 100, &mut rng);
    let accuracy = metrics::accuracy(&y_true, &y_pred);
    println!("accuracy: {}", accuracy);
    println!(
        "confusion matrix: {:?}",
        metrics::confusion_matrix(&y_true, &y_pred, domain.labels())
    );
    assert!(accuracy >= 0.9, "accuracy {} after training", accuracy);

    let (_, low) = network.predict(arr1(&[0.25, 0.25]).view(), &domain);
    let (_, high) = network.predict(arr1(&[0.75, 0.75]).view(), &domain);
    assert_eq!("A", low);
    assert_eq!("B", high);
}
