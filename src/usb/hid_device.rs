//! USB HID keyboard device.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and exposes a single HID IN endpoint carrying the 2-byte
//! playback report. Class control requests (get/set report, get/set
//! idle) are answered here; the LED output report from SET_REPORT is
//! where the host-driven playback suppression signal comes from.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::config;
use crate::hid::keyboard::{KEYBOARD_REPORT_DESCRIPTOR, LED_CAPS_LOCK};
use crate::hid::KeyReport;
use defmt::{info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, ReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

static KB_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static USB_REQUEST_HANDLER: StaticCell<PlaybackRequestHandler> = StaticCell::new();
static USB_POWER_HANDLER: StaticCell<UsbPowerHandler> = StaticCell::new();
static USB_SUSPEND_SIGNAL: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Playback is suppressed until the host's first LED report clears it;
/// a brand-new keyboard should not start typing into thin air.
static SUPPRESS: AtomicBool = AtomicBool::new(true);

/// Last submitted report, answered back on GET_REPORT.
static LAST_MODIFIER: AtomicU8 = AtomicU8::new(0);
static LAST_KEYCODE: AtomicU8 = AtomicU8::new(0);

/// Idle rate as set by SET_IDLE (4 ms units, HID convention).
static IDLE_RATE: AtomicU8 = AtomicU8::new(0);

struct UsbPowerHandler;

impl embassy_usb::Handler for UsbPowerHandler {
    fn suspended(&mut self, suspended: bool) {
        USB_SUSPEND_SIGNAL.signal(suspended);
    }
}

/// USB bus suspend/resume signal.
///
/// Emits `true` when the host suspends the bus and `false` when resumed.
pub fn suspend_signal() -> &'static Signal<CriticalSectionRawMutex, bool> {
    &USB_SUSPEND_SIGNAL
}

/// Class control request handling for the keyboard interface.
struct PlaybackRequestHandler;

impl RequestHandler for PlaybackRequestHandler {
    fn get_report(&mut self, _id: ReportId, buf: &mut [u8]) -> Option<usize> {
        let report = KeyReport::new(
            LAST_MODIFIER.load(Ordering::Relaxed),
            LAST_KEYCODE.load(Ordering::Relaxed),
        );
        let n = report.serialize(buf);
        (n > 0).then_some(n)
    }

    fn set_report(&mut self, _id: ReportId, data: &[u8]) -> OutResponse {
        // 1-byte LED output report; CapsLock doubles as "hold playback".
        if let Some(&leds) = data.first() {
            let suppress = leds & LED_CAPS_LOCK != 0;
            SUPPRESS.store(suppress, Ordering::Relaxed);
            info!("LED report {:x}, playback suppressed: {}", leds, suppress);
        }
        OutResponse::Accepted
    }

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        Some(IDLE_RATE.load(Ordering::Relaxed) as u32 * 4)
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, duration_ms: u32) {
        IDLE_RATE.store((duration_ms / 4).min(255) as u8, Ordering::Relaxed);
    }
}

/// Whether the host is currently holding playback (CapsLock LED set,
/// or no LED report received yet).
pub fn suppressed() -> bool {
    SUPPRESS.load(Ordering::Relaxed)
}

/// Record a submitted report so GET_REPORT can answer with it.
pub fn record_report(report: &KeyReport) {
    LAST_MODIFIER.store(report.modifier, Ordering::Relaxed);
    LAST_KEYCODE.store(report.keycode, Ordering::Relaxed);
}

/// Build result containing the USB device runner and the report writer.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, Driver<'static, peripherals::USBD, HardwareVbusDetect>>,
    pub keyboard_writer:
        HidWriter<'static, Driver<'static, peripherals::USBD, HardwareVbusDetect>, 2>,
}

/// Initialise the USB stack and create the HID keyboard device.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbHidDevice {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    // Build the USB device.
    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    let usb_handler = USB_POWER_HANDLER.init(UsbPowerHandler);
    builder.handler(usb_handler);

    let kb_state = KB_STATE.init(State::new());
    let request_handler = USB_REQUEST_HANDLER.init(PlaybackRequestHandler);
    let kb_config = HidConfig {
        report_descriptor: KEYBOARD_REPORT_DESCRIPTOR,
        request_handler: Some(request_handler),
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 2,
    };
    let keyboard_writer = HidWriter::new(&mut builder, kb_state, kb_config);

    let device = builder.build();

    info!("USB HID keyboard device initialised");

    UsbHidDevice {
        device,
        keyboard_writer,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles USB enumeration, suspend/resume, and endpoint servicing.
/// It runs forever (or until the USB cable is disconnected).
pub async fn run_usb_device(
    mut device: UsbDevice<'static, Driver<'static, peripherals::USBD, HardwareVbusDetect>>,
) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Transmit one report on the keyboard endpoint.
///
/// Failures (endpoint disabled during suspend, cable pulled) are logged
/// and dropped - a missed keystroke beats a halted device.
pub async fn submit_report(
    writer: &mut HidWriter<'static, Driver<'static, peripherals::USBD, HardwareVbusDetect>, 2>,
    report: &KeyReport,
) {
    let mut buf = [0u8; 2];
    let n = report.serialize(&mut buf);
    if let Err(_e) = writer.write(&buf[..n]).await {
        warn!("USB keyboard write failed");
    } else {
        record_report(report);
    }
}
