use booltree::prelude::*;
use booltree::AvailableAttributes;

use rand::prelude::*;
use rand::rngs::StdRng;


fn sample(
    attributes: &[&str],
    categories: &[&str],
    instances: Vec<Instance>,
) -> Sample
{
    let attributes = attributes.iter().map(|s| s.to_string()).collect();
    let categories = categories.iter().map(|s| s.to_string()).collect();
    Sample::new(attributes, categories, instances).unwrap()
}


fn fit(sample: &Sample) -> DecisionTreeClassifier {
    DecisionTreeBuilder::new(sample)
        .build()
        .fit()
        .unwrap()
}


/// Collects every leaf of the tree.
fn leaves(node: &Node) -> Vec<&LeafNode> {
    match node {
        Node::Branch(b) => {
            let mut all = leaves(b.true_branch());
            all.extend(leaves(b.false_branch()));
            all
        },
        Node::Leaf(l) => vec![l],
    }
}


/// Random sample with `n_attribute` attributes.
/// The category is `x0 xor x2`, so the sample is consistent.
fn random_sample(rng: &mut StdRng, n_sample: usize, n_attribute: usize)
    -> Sample
{
    let attributes = (0..n_attribute).map(|k| format!("a{k}"))
        .collect::<Vec<_>>();
    let attributes = attributes.iter().map(String::as_str)
        .collect::<Vec<_>>();
    let instances = (0..n_sample).map(|_| {
            let values = (0..n_attribute).map(|_| rng.gen::<bool>())
                .collect::<Vec<_>>();
            let category = (values[0] ^ values[2]) as usize;
            Instance::new(category, values)
        })
        .collect::<Vec<_>>();
    sample(&attributes, &["even", "odd"], instances)
}


/// Random sample whose categories ignore the attributes.
fn noisy_sample(rng: &mut StdRng, n_sample: usize, n_attribute: usize)
    -> Sample
{
    let attributes = (0..n_attribute).map(|k| format!("a{k}"))
        .collect::<Vec<_>>();
    let attributes = attributes.iter().map(String::as_str)
        .collect::<Vec<_>>();
    let instances = (0..n_sample).map(|_| {
            let values = (0..n_attribute).map(|_| rng.gen::<bool>())
                .collect::<Vec<_>>();
            Instance::new(rng.gen_range(0..3), values)
        })
        .collect::<Vec<_>>();
    sample(&attributes, &["a", "b", "c"], instances)
}


#[test]
fn fever_separates_live_and_die() {
    let sample = sample(&["fever", "cough"], &["live", "die"], vec![
        Instance::new(0, [true,  true]),
        Instance::new(0, [true,  false]),
        Instance::new(1, [false, true]),
        Instance::new(1, [false, false]),
    ]);
    let tree = fit(&sample);

    let Node::Branch(root) = tree.root() else { panic!("expected a split"); };
    assert_eq!(root.name(), "fever");
    assert_eq!(root.attribute(), 0);

    let Node::Leaf(t) = root.true_branch() else { panic!("expected a leaf"); };
    let Node::Leaf(f) = root.false_branch() else { panic!("expected a leaf"); };
    assert_eq!((t.name(), t.probability()), ("live", 1f64));
    assert_eq!((f.name(), f.probability()), ("die", 1f64));

    assert_eq!(tree.evaluate(sample.instances()), 1f64);
    assert_eq!(tree.to_string(), "\
        fever = True:\n\
        \tClass live, prob = 1\n\
        fever = False:\n\
        \tClass die, prob = 1\n\
    ");
}


#[test]
fn single_category_gives_a_single_leaf() {
    let sample = sample(&["a", "b"], &["x", "y"], vec![
        Instance::new(1, [true,  true]),
        Instance::new(1, [false, true]),
        Instance::new(1, [true,  false]),
    ]);
    let tree = fit(&sample);

    assert_eq!(tree.depth(), 0);
    let Node::Leaf(leaf) = tree.root() else { panic!("expected a leaf"); };
    assert_eq!(leaf.category(), 1);
    assert_eq!(leaf.probability(), 1f64);
}


#[test]
fn unseen_combination_uses_the_global_fallback() {
    // Splitting on `fever` and then `cough` leaves no training instance
    // with fever and without cough.
    let sample = sample(&["fever", "cough"], &["live", "die"], vec![
        Instance::new(0, [true,  true]),
        Instance::new(1, [true,  true]),
        Instance::new(1, [false, false]),
        Instance::new(1, [false, true]),
    ]);
    let tree = fit(&sample);

    let unseen = Instance::new(0, [true, false]);
    let leaf = tree.try_classify(&unseen).unwrap();
    assert_eq!(leaf.name(), "die");
    assert_eq!(leaf.probability(), 0.75);

    // Both conflicting instances land on the same leaf,
    // where the tie goes to the first category.
    let leaf = tree.try_classify(&sample[0]).unwrap();
    assert_eq!(leaf.name(), "live");
    assert_eq!(leaf.probability(), 0.5);
}


#[test]
fn equally_good_attributes_pick_the_lower_index() {
    let instances = vec![
        Instance::new(0, [false, true,  true]),
        Instance::new(0, [true,  true,  true]),
        Instance::new(1, [false, false, false]),
        Instance::new(1, [true,  false, false]),
    ];
    let forward = sample(&["noise", "b", "c"], &["x", "y"], instances.clone());
    let Node::Branch(root) = fit(&forward).root().clone() else {
        panic!("expected a split");
    };
    assert_eq!(root.attribute(), 1);
    assert_eq!(root.name(), "b");

    // Same columns, other names: the index decides, not the name.
    let renamed = sample(&["noise", "z", "a"], &["x", "y"], instances);
    let Node::Branch(root) = fit(&renamed).root().clone() else {
        panic!("expected a split");
    };
    assert_eq!(root.attribute(), 1);
    assert_eq!(root.name(), "z");
}


#[test]
fn induction_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(1234);
    let sample = noisy_sample(&mut rng, 60, 6);

    let first = fit(&sample);
    let second = fit(&sample.clone());
    assert_eq!(first, second);

    let tree = DecisionTreeBuilder::new(&sample).build();
    let instances = sample.instances().iter().collect::<Vec<_>>();
    let available = AvailableAttributes::all(6);
    assert_eq!(
        tree.induce(&instances, &available).unwrap(),
        tree.induce(&instances, &available).unwrap(),
    );
}


#[test]
fn depth_never_exceeds_the_number_of_attributes() {
    let mut rng = StdRng::seed_from_u64(42);
    for n_attribute in [1, 3, 5, 8] {
        let sample = noisy_sample(&mut rng, 80, n_attribute);
        let tree = fit(&sample);
        assert!(tree.depth() <= n_attribute);
    }
}


#[test]
fn probabilities_are_bounded() {
    let mut rng = StdRng::seed_from_u64(7);
    let sample = noisy_sample(&mut rng, 100, 4);
    let tree = fit(&sample);

    for leaf in leaves(tree.root()) {
        assert!((0f64..=1f64).contains(&leaf.probability()));
    }
}


#[test]
fn pure_leaves_only_hold_their_category() {
    let mut rng = StdRng::seed_from_u64(99);
    let sample = noisy_sample(&mut rng, 100, 4);
    let tree = fit(&sample);

    for instance in sample.instances() {
        let leaf = tree.try_classify(instance).unwrap();
        if leaf.probability() == 1f64 {
            assert_eq!(leaf.category(), instance.category());
        }
    }
}


#[test]
fn consistent_sample_is_learned_exactly() {
    let mut rng = StdRng::seed_from_u64(2024);
    let sample = random_sample(&mut rng, 50, 5);
    let tree = fit(&sample);

    assert_eq!(tree.evaluate(sample.instances()), 1f64);
    assert_eq!(tree.accuracy(sample.instances()), 1f64);
    assert_eq!(
        tree.predict_all(&sample),
        sample.instances().iter().map(|i| i.category()).collect::<Vec<_>>(),
    );
}


#[test]
fn evaluating_nothing_gives_zero() {
    let sample = sample(&["a"], &["x", "y"], vec![
        Instance::new(0, [true]),
        Instance::new(1, [false]),
    ]);
    let tree = fit(&sample);
    assert_eq!(tree.evaluate(&[]), 0f64);
}


#[test]
fn balance_criterion_ignores_categories() {
    // `a` separates the categories with a 2/2 split;
    // `b` splits 1/3, which is less balanced, and separates nothing.
    let sample = sample(&["a", "b"], &["x", "y"], vec![
        Instance::new(0, [true,  true]),
        Instance::new(0, [true,  false]),
        Instance::new(1, [false, false]),
        Instance::new(1, [false, false]),
    ]);

    let purity = fit(&sample);
    let Node::Branch(root) = purity.root() else { panic!("expected a split"); };
    assert_eq!(root.name(), "a");

    let balance = DecisionTreeBuilder::new(&sample)
        .criterion(Criterion::Balance)
        .build()
        .fit()
        .unwrap();
    let Node::Branch(root) = balance.root() else { panic!("expected a split"); };
    assert_eq!(root.name(), "b");
}
