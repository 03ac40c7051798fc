//! Command: a remote control whose buttons are bound to command objects.
//!
//! Run with: cargo run --bin command_remote

use pattern_demos::{console, telemetry};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, warn};

// =============================================================================
// Receivers
// =============================================================================

#[derive(Debug, Default)]
struct Light {
    on: bool,
}

impl Light {
    fn on(&mut self) -> String {
        self.on = true;
        "Light is ON".to_string()
    }

    fn off(&mut self) -> String {
        self.on = false;
        "Light is OFF".to_string()
    }
}

// Low and Medium exist on the fan but no button is wired to them.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FanSpeed {
    #[default]
    Off,
    Low,
    Medium,
    High,
}

#[derive(Debug, Default)]
struct CeilingFan {
    speed: FanSpeed,
}

impl CeilingFan {
    fn set_speed(&mut self, speed: FanSpeed) -> String {
        self.speed = speed;
        match speed {
            FanSpeed::Off => "Ceiling Fan is OFF".to_string(),
            FanSpeed::Low => "Ceiling Fan is on Low".to_string(),
            FanSpeed::Medium => "Ceiling Fan is on Medium".to_string(),
            FanSpeed::High => "Ceiling Fan is on High".to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct Stereo {
    on: bool,
    cd_input: bool,
    volume: u8,
}

impl Stereo {
    fn on(&mut self) -> String {
        self.on = true;
        "Stereo is ON".to_string()
    }

    fn off(&mut self) -> String {
        self.on = false;
        "Stereo is OFF".to_string()
    }

    fn set_cd(&mut self) -> String {
        self.cd_input = true;
        "Stereo is set for CD input".to_string()
    }

    fn set_volume(&mut self, volume: u8) -> String {
        self.volume = volume;
        format!("Stereo volume set to {volume}")
    }

    fn play_cd(&mut self) -> Vec<String> {
        vec![self.on(), self.set_cd(), self.set_volume(11)]
    }
}

#[derive(Debug, Default)]
struct GarageDoor {
    open: bool,
}

impl GarageDoor {
    fn up(&mut self) -> String {
        self.open = true;
        "Garage Door is Open".to_string()
    }

    fn down(&mut self) -> String {
        self.open = false;
        "Garage Door is Closed".to_string()
    }
}

// =============================================================================
// Commands
// =============================================================================

trait Command {
    fn name(&self) -> &str;
    fn execute(&self) -> Vec<String>;
    fn undo(&self) -> Vec<String>;
}

struct NoCommand;

impl Command for NoCommand {
    fn name(&self) -> &str {
        "NoCommand"
    }

    fn execute(&self) -> Vec<String> {
        Vec::new()
    }

    fn undo(&self) -> Vec<String> {
        Vec::new()
    }
}

struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl Command for LightOnCommand {
    fn name(&self) -> &str {
        "LightOnCommand"
    }

    fn execute(&self) -> Vec<String> {
        vec![self.light.borrow_mut().on()]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.light.borrow_mut().off()]
    }
}

struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl Command for LightOffCommand {
    fn name(&self) -> &str {
        "LightOffCommand"
    }

    fn execute(&self) -> Vec<String> {
        vec![self.light.borrow_mut().off()]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.light.borrow_mut().on()]
    }
}

struct CeilingFanHighCommand {
    fan: Rc<RefCell<CeilingFan>>,
}

impl Command for CeilingFanHighCommand {
    fn name(&self) -> &str {
        "CeilingFanHighCommand"
    }

    fn execute(&self) -> Vec<String> {
        vec![self.fan.borrow_mut().set_speed(FanSpeed::High)]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.fan.borrow_mut().set_speed(FanSpeed::Off)]
    }
}

struct CeilingFanOffCommand {
    fan: Rc<RefCell<CeilingFan>>,
}

impl Command for CeilingFanOffCommand {
    fn name(&self) -> &str {
        "CeilingFanOffCommand"
    }

    fn execute(&self) -> Vec<String> {
        vec![self.fan.borrow_mut().set_speed(FanSpeed::Off)]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.fan.borrow_mut().set_speed(FanSpeed::High)]
    }
}

struct GarageDoorUpCommand {
    door: Rc<RefCell<GarageDoor>>,
}

impl Command for GarageDoorUpCommand {
    fn name(&self) -> &str {
        "GarageDoorUpCommand"
    }

    fn execute(&self) -> Vec<String> {
        vec![self.door.borrow_mut().up()]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.door.borrow_mut().down()]
    }
}

struct GarageDoorDownCommand {
    door: Rc<RefCell<GarageDoor>>,
}

impl Command for GarageDoorDownCommand {
    fn name(&self) -> &str {
        "GarageDoorDownCommand"
    }

    fn execute(&self) -> Vec<String> {
        vec![self.door.borrow_mut().down()]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.door.borrow_mut().up()]
    }
}

struct StereoOnWithCdCommand {
    stereo: Rc<RefCell<Stereo>>,
}

impl Command for StereoOnWithCdCommand {
    fn name(&self) -> &str {
        "StereoOnWithCdCommand"
    }

    fn execute(&self) -> Vec<String> {
        self.stereo.borrow_mut().play_cd()
    }

    fn undo(&self) -> Vec<String> {
        vec![self.stereo.borrow_mut().off()]
    }
}

struct StereoOffCommand {
    stereo: Rc<RefCell<Stereo>>,
}

impl Command for StereoOffCommand {
    fn name(&self) -> &str {
        "StereoOffCommand"
    }

    fn execute(&self) -> Vec<String> {
        vec![self.stereo.borrow_mut().off()]
    }

    fn undo(&self) -> Vec<String> {
        self.stereo.borrow_mut().play_cd()
    }
}

/// Runs a batch of commands as one button press.
struct MacroCommand {
    name: String,
    commands: Vec<Rc<dyn Command>>,
}

impl MacroCommand {
    fn new(name: impl Into<String>, commands: Vec<Rc<dyn Command>>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }
}

impl Command for MacroCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self) -> Vec<String> {
        self.commands.iter().flat_map(|c| c.execute()).collect()
    }

    // Inverse order so the last device touched is the first restored.
    fn undo(&self) -> Vec<String> {
        self.commands.iter().rev().flat_map(|c| c.undo()).collect()
    }
}

// =============================================================================
// Invoker
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum RemoteError {
    #[error("slot {slot} is out of range (remote has {slots} slots)")]
    SlotOutOfRange { slot: usize, slots: usize },
}

struct RemoteControl {
    on_commands: Vec<Rc<dyn Command>>,
    off_commands: Vec<Rc<dyn Command>>,
    undo_command: Rc<dyn Command>,
}

impl RemoteControl {
    fn new(slots: usize) -> Self {
        let no_command: Rc<dyn Command> = Rc::new(NoCommand);
        Self {
            on_commands: vec![Rc::clone(&no_command); slots],
            off_commands: vec![Rc::clone(&no_command); slots],
            undo_command: no_command,
        }
    }

    fn slots(&self) -> usize {
        self.on_commands.len()
    }

    fn check_slot(&self, slot: usize) -> Result<(), RemoteError> {
        if slot < self.slots() {
            Ok(())
        } else {
            warn!(slot, slots = self.slots(), "button pressed on a missing slot");
            Err(RemoteError::SlotOutOfRange {
                slot,
                slots: self.slots(),
            })
        }
    }

    fn set_command(
        &mut self,
        slot: usize,
        on: Rc<dyn Command>,
        off: Rc<dyn Command>,
    ) -> Result<(), RemoteError> {
        self.check_slot(slot)?;
        debug!(slot, on = on.name(), off = off.name(), "slot programmed");
        self.on_commands[slot] = on;
        self.off_commands[slot] = off;
        Ok(())
    }

    fn on_button_pressed(&mut self, slot: usize) -> Result<Vec<String>, RemoteError> {
        self.check_slot(slot)?;
        let command = Rc::clone(&self.on_commands[slot]);
        let output = command.execute();
        self.undo_command = command;
        Ok(output)
    }

    fn off_button_pressed(&mut self, slot: usize) -> Result<Vec<String>, RemoteError> {
        self.check_slot(slot)?;
        let command = Rc::clone(&self.off_commands[slot]);
        let output = command.execute();
        self.undo_command = command;
        Ok(output)
    }

    fn undo_button_pressed(&mut self) -> Vec<String> {
        debug!(command = self.undo_command.name(), "undo");
        self.undo_command.undo()
    }
}

impl fmt::Display for RemoteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------ Remote Control ------")?;
        for (slot, (on, off)) in self.on_commands.iter().zip(&self.off_commands).enumerate() {
            writeln!(f, "[slot {slot}] {:<24}{}", on.name(), off.name())?;
        }
        write!(f, "[undo] {}", self.undo_command.name())
    }
}

fn press(result: Result<Vec<String>, RemoteError>) {
    match result {
        Ok(lines) => console::print_lines(lines),
        Err(err) => console::report_error(&err),
    }
}

fn main() -> Result<(), RemoteError> {
    telemetry::init_logging();

    let mut remote = RemoteControl::new(5);
    let light = Rc::new(RefCell::new(Light::default()));
    let fan = Rc::new(RefCell::new(CeilingFan::default()));
    let stereo = Rc::new(RefCell::new(Stereo::default()));
    let door = Rc::new(RefCell::new(GarageDoor::default()));

    let light_on: Rc<dyn Command> = Rc::new(LightOnCommand { light: Rc::clone(&light) });
    let light_off: Rc<dyn Command> = Rc::new(LightOffCommand { light: Rc::clone(&light) });
    let fan_high: Rc<dyn Command> = Rc::new(CeilingFanHighCommand { fan: Rc::clone(&fan) });
    let fan_off: Rc<dyn Command> = Rc::new(CeilingFanOffCommand { fan: Rc::clone(&fan) });
    let stereo_on: Rc<dyn Command> = Rc::new(StereoOnWithCdCommand { stereo: Rc::clone(&stereo) });
    let stereo_off: Rc<dyn Command> = Rc::new(StereoOffCommand { stereo: Rc::clone(&stereo) });

    remote.set_command(0, Rc::clone(&light_on), Rc::clone(&light_off))?;
    remote.set_command(1, Rc::clone(&fan_high), Rc::clone(&fan_off))?;
    remote.set_command(2, Rc::clone(&stereo_on), Rc::clone(&stereo_off))?;
    remote.set_command(
        3,
        Rc::new(GarageDoorUpCommand { door: Rc::clone(&door) }),
        Rc::new(GarageDoorDownCommand { door: Rc::clone(&door) }),
    )?;

    console::section("Remote control");
    println!("{remote}");

    console::next_section("Button presses");
    press(remote.on_button_pressed(0));
    press(remote.off_button_pressed(0));
    console::print_lines(remote.undo_button_pressed());
    press(remote.on_button_pressed(1));
    press(remote.off_button_pressed(1));
    press(remote.on_button_pressed(2));
    press(remote.off_button_pressed(2));
    console::print_lines(remote.undo_button_pressed());
    press(remote.on_button_pressed(3));
    press(remote.off_button_pressed(3));
    // Nothing is bound to slot 4 yet.
    press(remote.off_button_pressed(4));
    press(remote.on_button_pressed(7));

    console::next_section("Party mode");
    let party_on: Rc<dyn Command> = Rc::new(MacroCommand::new(
        "PartyOnMacro",
        vec![light_on, stereo_on, fan_high],
    ));
    let party_off: Rc<dyn Command> = Rc::new(MacroCommand::new(
        "PartyOffMacro",
        vec![light_off, stereo_off, fan_off],
    ));
    remote.set_command(4, party_on, party_off)?;
    println!("--- Pushing Macro On ---");
    press(remote.on_button_pressed(4));
    println!("--- Pushing Macro Off ---");
    press(remote.off_button_pressed(4));
    println!("--- Pushing Undo ---");
    console::print_lines(remote.undo_button_pressed());

    Ok(())
}
