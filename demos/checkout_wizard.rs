use ayumi::prelude::*;
use std::rc::Rc;

fn summary(tree: &Element) -> String {
    tree.indicators()
        .iter()
        .map(|indicator| match &indicator.content {
            IndicatorContent::Number(n) => format!("({n})"),
            IndicatorContent::Glyph(Glyph::Check) => "(v)".to_string(),
            IndicatorContent::Glyph(Glyph::Cross) => "(x)".to_string(),
            IndicatorContent::Icon(icon) => format!("[{icon}]"),
            IndicatorContent::Empty => "( )".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" --- ")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let controller = Rc::new(StepperController::new());
    let mut changes = controller.watch();
    let watcher = tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let state = changes.borrow_and_update().clone();
            println!(
                "watch: step {} failed {:?}",
                state.current_step(),
                state.failed_steps().collect::<Vec<_>>()
            );
        }
        println!("watch: controller disposed");
    });

    let stepper = Stepper::builder()
        .step(StepDescriptor::new("Cart").content(|| Element::Empty))
        .step(StepDescriptor::new("Shipping").subtitle("2-3 days"))
        .step(StepDescriptor::new("Payment").icon("credit_card"))
        .step("Done")
        .active_color(Color::from_hex("#4CAF50")?)
        .build();
    let view = StepperView::new(stepper, Rc::clone(&controller));

    println!("{}", summary(&view.render(&())));

    controller.next();
    controller.next();
    controller.set_failed(2, true);
    tokio::task::yield_now().await;
    if view.needs_render() {
        println!("{}", summary(&view.render(&())));
    }

    controller.set_failed(2, false);
    controller.next();
    tokio::task::yield_now().await;
    println!("{}", summary(&view.render(&())));

    controller.dispose();
    watcher.await?;

    Ok(())
}
