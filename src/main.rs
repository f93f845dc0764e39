use nobat::booking::details::{duration_label, persian_number};
use nobat::booking::{BookingDetails, notify, pricing};
use nobat::calendar::jalaali::GregorianDate;
use nobat::core::App;
use nobat::terminal::Terminal;
use nobat::terminal_event::TerminalEvent;
use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let today = today_gregorian();
    let mut app = App::new(today);
    let mut terminal = Terminal::new()?;

    terminal.enter_raw_mode()?;
    terminal.set_line_wrap(false)?;
    terminal.hide_cursor()?;

    let result = run(&mut app, &mut terminal);

    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()?;
    result?;

    if let Some(details) = app.booking() {
        print_confirmation(details);
        dispatch_notification(details);
    }

    Ok(())
}

fn run(app: &mut App, terminal: &mut Terminal) -> io::Result<()> {
    let mut frame_height = 0u16;

    loop {
        if terminal.poll(POLL_TIMEOUT)? {
            match terminal.read_event()? {
                TerminalEvent::Key(key) => app.handle_key(key),
                TerminalEvent::Resize { .. } => terminal.refresh_size()?,
            }
        }

        app.tick();

        if app.take_dirty() {
            let frame = app.render();
            frame_height = frame.lines.len() as u16;
            terminal.draw_frame(&frame.lines)?;
            match frame.cursor {
                Some((col, row)) => {
                    terminal.place_cursor(col, row)?;
                    terminal.show_cursor()?;
                }
                None => terminal.hide_cursor()?,
            }
            terminal.flush()?;
        }

        if app.should_exit() {
            terminal.finish_below(frame_height)?;
            return Ok(());
        }
    }
}

/// Civil date in UTC; good enough to anchor the picker on the current day.
fn today_gregorian() -> GregorianDate {
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| (elapsed.as_secs() / 86_400) as i64)
        .unwrap_or(0);
    GregorianDate::from_unix_days(days)
}

fn print_confirmation(details: &BookingDetails) {
    let total = pricing::total_price(details);
    let deposit = pricing::deposit(&details.city);

    println!("رزرو شما ثبت شد، {}!", details.name);
    println!();
    println!("  {}", details.experience.title());
    println!("  مدت: {}", duration_label(details.duration_hours));
    println!(
        "  زمان: {} ساعت {}",
        details.formatted_date(),
        details.time
    );
    println!("  شهر: {}", details.city);
    println!();
    println!("  مبلغ کل: {} تومان", persian_number(total));
    println!("  بیعانه: {} تومان", persian_number(deposit));
    println!();
    println!("برای قطعی شدن رزرو، بیعانه را پرداخت کنید.");
    println!("منتظر رسید پرداخت در تلگرام: @avinasayah");
}

fn dispatch_notification(details: &BookingDetails) {
    let total = pricing::total_price(details);
    let deposit = pricing::deposit(&details.city);

    match notify::send(details, total, deposit) {
        Ok(true) => println!("\nاعلان رزرو برای اپراتور ارسال شد."),
        Ok(false) => {}
        Err(message) => eprintln!("\nهشدار: {message}"),
    }
}
