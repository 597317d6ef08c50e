use backprop::{
    metrics::{accuracy, confusion_matrix},
    Domain, Network, Trainer,
};
use ndarray::arr1;
use ndarray_rand::rand::{thread_rng, Rng};

fn evaluate(
    network: &mut Network,
    domain: &Domain<&'static str>,
    samples: usize,
    rng: &mut impl Rng,
) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut y_true = Vec::new();
    let mut y_pred = Vec::new();
    for _ in 0..samples {
        let pattern = domain.sample(rng);
        let (_, label) = network.predict(pattern.vector.view(), domain);
        y_true.push(pattern.class_label);
        y_pred.push(label);
    }
    (y_true, y_pred)
}

// Three boxes along the diagonal; the middle class trains toward 0.5.
fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let domain = Domain::new(vec![
        ("A", vec![(0.0, 0.32), (0.0, 0.32)]),
        ("B", vec![(0.34, 0.65), (0.34, 0.65)]),
        ("C", vec![(0.67, 1.0), (0.67, 1.0)]),
    ])
    .unwrap();

    let mut rng = thread_rng();
    let mut network = Trainer::new(&[6, 1])
        .learning_rate(0.3)
        .iterations(5000)
        .train(&domain, &mut rng)
        .unwrap();

    for center in [0.16, 0.5, 0.84] {
        let input = arr1(&[center, center]);
        let (output, label) = network.predict(input.view(), &domain);
        println!("({}, {}) -> {} (output {:.3})", center, center, label, output);
    }

    let (y_true, y_pred) = evaluate(&mut network, &domain, 150, &mut rng);
    println!("accuracy: {}", accuracy(&y_true, &y_pred));
    println!("{:?}", confusion_matrix(&y_true, &y_pred, domain.labels()));
}
