use burrow::{
    is_connected, Coord2, CorridorWidth, GenerationConfig, GenerationWarning, Generator,
    GraphConfig, LayoutError, Outcome, RoomFill, RoomFirstConfig, RoomFootprint, Strategy, Tile,
    TileCanvas, TileSurface, WalkConfig,
};

fn run(config: GenerationConfig) -> (Generator, TileCanvas, Outcome) {
    let mut generator = Generator::new(config).unwrap();
    let mut canvas = TileCanvas::new();
    let outcome = generator.generate(&mut canvas);
    (generator, canvas, outcome)
}

fn assert_painted(generator: &Generator, canvas: &TileCanvas) {
    let layout = generator.layout().expect("layout stored after a run");
    assert_eq!(canvas.floor(), &layout.floor);
    assert!(is_connected(canvas.floor()));
    for wall in canvas.walls() {
        assert!(!canvas.floor().contains(wall));
    }
}

#[test]
fn corridor_first_from_json() {
    let config = GenerationConfig::from_json(
        r#"{
            "seed": 17,
            "strategy": {
                "kind": "corridor_first",
                "corridor_length": 10,
                "build_iterations": 12,
                "corridor_width": 2,
                "room_percent": 0.6,
                "room_shape": { "kind": "random_walk", "walk_length": 8, "iterations": 6 },
                "finish": { "remove_holes": 2, "expand_floor": 1 }
            }
        }"#,
    )
    .unwrap();
    let (generator, canvas, outcome) = run(config);
    assert!(outcome.is_generated());
    assert_painted(&generator, &canvas);
    assert_eq!(generator.layout().unwrap().corridor_count, 12);
}

#[test]
fn room_first_rooms_hold_their_centers() {
    let config = GenerationConfig {
        seed: 3,
        strategy: Strategy::RoomFirst(RoomFirstConfig {
            area_size: Coord2::new(50, 40),
            min_room_size: Coord2::new(10, 8),
            corridor_width: CorridorWidth::Three,
            ..RoomFirstConfig::default()
        }),
    };
    let (generator, canvas, outcome) = run(config);
    assert!(outcome.is_generated());
    assert_painted(&generator, &canvas);
    for room in &generator.layout().unwrap().main_rooms {
        let RoomFootprint::Rect(rect) = room else {
            panic!("room-first rooms are rectangles");
        };
        assert_eq!(canvas.tile_at(rect.rounded_center()), Tile::Floor);
        assert!(rect.min().x >= 0 && rect.max().x <= 50);
        assert!(rect.min().y >= 0 && rect.max().y <= 40);
    }
}

#[test]
fn room_first_random_walk_fill() {
    let config = GenerationConfig {
        seed: 9,
        strategy: Strategy::RoomFirst(RoomFirstConfig {
            fill: RoomFill::RandomWalk(WalkConfig::default()),
            ..RoomFirstConfig::default()
        }),
    };
    let (_, canvas, outcome) = run(config);
    assert!(outcome.is_generated());
    assert!(!canvas.floor().is_empty());
}

#[test]
fn graph_rooms_do_not_overlap() {
    let config = GenerationConfig {
        seed: 21,
        strategy: Strategy::Graph(GraphConfig {
            generate_in_circle: true,
            ..GraphConfig::default()
        }),
    };
    let (generator, canvas, outcome) = run(config);
    assert!(outcome.is_generated());
    assert_painted(&generator, &canvas);

    let layout = generator.layout().unwrap();
    let mut rects: Vec<_> = layout
        .main_rooms
        .iter()
        .filter_map(|r| match r {
            RoomFootprint::Rect(rect) => Some(*rect),
            RoomFootprint::Cells(_) => None,
        })
        .collect();
    rects.extend(layout.side_rooms.iter().copied());
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            assert!(!rects[i].intersects(&rects[j]), "{:?} {:?}", rects[i], rects[j]);
        }
    }
}

#[test]
fn warning_keeps_previous_picture() {
    let mut canvas = TileCanvas::new();
    let mut good = Generator::new(GenerationConfig::default()).unwrap();
    assert!(good.generate(&mut canvas).is_generated());
    let before = canvas.to_ascii();

    let mut bad = Generator::new(GenerationConfig {
        seed: 0,
        strategy: Strategy::Graph(GraphConfig {
            min_room_size: Coord2::new(2, 2),
            room_size_delta: Coord2::new(1, 1),
            main_room_multiplier: 2.0,
            ..GraphConfig::default()
        }),
    })
    .unwrap();
    assert_eq!(
        bad.generate(&mut canvas),
        Outcome::Skipped(GenerationWarning::NoMainRooms)
    );
    assert_eq!(canvas.to_ascii(), before);
    assert_eq!(canvas.clear_count(), 1);
}

#[test]
fn clear_resets_canvas() {
    let (mut generator, mut canvas, _) = run(GenerationConfig::default());
    generator.clear(&mut canvas);
    assert!(canvas.is_blank());
    assert!(generator.layout().is_none());
    canvas.clear();
    assert_eq!(canvas.clear_count(), 2);
}

#[test]
fn bad_json_is_rejected() {
    assert!(matches!(
        GenerationConfig::from_json(r#"{ "strategy": { "kind": "graph", "corridor_width": 0 } }"#),
        Err(LayoutError::ConfigParse(_))
    ));
    assert!(matches!(
        GenerationConfig::from_json(r#"{ "strategy": { "kind": "room_first", "area_size": { "x": -1, "y": 4 } } }"#),
        Err(LayoutError::InvalidConfig(_))
    ));
}
