use backprop::{
    metrics::{accuracy, confusion_matrix},
    Domain, Network, Trainer,
};
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

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let domain = Domain::new(vec![
        ("A", vec![(0.0, 0.4999999), (0.0, 0.4999999)]),
        ("B", vec![(0.5, 1.0), (0.5, 1.0)]),
    ])
    .unwrap();

    let mut rng = thread_rng();
    let mut network = Trainer::new(&[4, 1])
        .learning_rate(0.3)
        .iterations(2000)
        .train(&domain, &mut rng)
        .unwrap();

    let (y_true, y_pred) = evaluate(&mut network, &domain, 100, &mut rng);
    println!("accuracy: {}", accuracy(&y_true, &y_pred));
    println!("{:?}", confusion_matrix(&y_true, &y_pred, domain.labels()));
}
