use ayumi::{
    Color, Element, Fractions, NumberedStep, Size, StepList, StepListStyle, Timeline,
    TimelineEntry,
};

fn print_lines(label: &str, tree: &Element, container: Size) {
    for line in tree.lines() {
        let rect = line.layout(container);
        println!(
            "{label}: {:?} line at ({}, {}) {}x{} {}",
            line.axis, rect.x, rect.y, rect.width, rect.height, line.color
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let timeline = Timeline::new(vec![
        TimelineEntry::new("Branch cut").time("Mon 09:00"),
        TimelineEntry::new("Release candidate")
            .time("Tue 14:30")
            .subtitle("rc.1 tagged"),
        TimelineEntry::new("Rollback")
            .time("Wed 11:05")
            .color(Color::from_hex("#F44336")?)
            .icon("undo"),
        TimelineEntry::new("Shipped").time("Thu 16:00"),
    ]);
    let tree = timeline.render();
    println!("timeline: {} entries", tree.indicators().len());
    print_lines("timeline", &tree, Size::new(24.0, 64.0));

    let checklist = StepList::new(vec![
        NumberedStep::new("Bump the version"),
        NumberedStep::new("Update the changelog").description("Group entries by area"),
        NumberedStep::new("Publish"),
    ])
    .style(StepListStyle {
        divider: Some(Fractions::new(0.1, 1.0)?),
        ..StepListStyle::default()
    });
    let tree = checklist.render();
    for text in tree.texts() {
        println!("checklist: {}", text.text);
    }
    print_lines("checklist", &tree, Size::new(320.0, 48.0));

    Ok(())
}
