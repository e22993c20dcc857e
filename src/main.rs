//! Embedded entry point: nRF52840 firmware for the playback keyboard.
//!
//! Wires the host-testable playback engine to the Embassy USB stack.
//! Three tasks: the USB device runner, a suspend watcher, and the
//! playback loop that paces `Player::tick` at the HID poll interval.

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Input, Pin, Pull};
use embassy_nrf::peripherals::USBD;
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_time::{Duration, Ticker};
use embassy_usb::class::hid::HidWriter;
use embassy_usb::UsbDevice;
use panic_probe as _;

use pagetyper::config;
use pagetyper::player::{NavSignals, Player};
use pagetyper::script::pages::DEMO_SCRIPT;
use pagetyper::usb::hid_device;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("pagetyper starting");

    let usb = hid_device::init(p.USBD);

    spawner.must_spawn(usb_task(usb.device));
    spawner.must_spawn(suspend_watcher());
    spawner.must_spawn(playback(
        usb.keyboard_writer,
        p.P0_11.degrade(), // next page
        p.P0_12.degrade(), // previous page
    ));
}

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, Driver<'static, USBD, HardwareVbusDetect>>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn suspend_watcher() -> ! {
    loop {
        if hid_device::suspend_signal().wait().await {
            info!("USB suspended - playback stalls until resume");
        } else {
            info!("USB resumed");
        }
    }
}

/// Playback loop: one tick per HID poll interval.
///
/// The nav buttons are active-low and sampled as levels; the player
/// only consults them when the current page is exhausted.
#[embassy_executor::task]
async fn playback(
    mut writer: HidWriter<'static, Driver<'static, USBD, HardwareVbusDetect>, 2>,
    next_pin: AnyPin,
    prev_pin: AnyPin,
) -> ! {
    let next_btn = Input::new(next_pin, Pull::Up);
    let prev_btn = Input::new(prev_pin, Pull::Up);

    let mut player = Player::new(&DEMO_SCRIPT);
    let mut ticker = Ticker::every(Duration::from_millis(config::USB_HID_POLL_MS as u64));

    info!("playback task started ({} pages)", DEMO_SCRIPT.page_count());

    loop {
        ticker.next().await;

        let nav = NavSignals {
            next: next_btn.is_low(),
            prev: prev_btn.is_low(),
        };

        if let Some(report) = player.tick(true, nav, hid_device::suppressed()) {
            hid_device::submit_report(&mut writer, &report).await;
        }
    }
}
