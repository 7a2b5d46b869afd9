/*!
# The Simulated Board

The terminal executable runs scripts against a simulated board.

## Environment

 * `ALOHA_LINES` number of lines, 4 to 65535.
 * `ALOHA_ROW` bytes per line, 8 to 256.
 * `ALOHA_SEED` seed for `rand`.
 * `ALOHA_EEPROM` file that keeps the EEPROM between sessions. The file is
   the eight 32 KiB chips followed by a CRC-32; a damaged file is ignored.
 * `RUST_LOG` log filter, for example `RUST_LOG=aloha=debug`. Logs go to
   standard error.

## Peripherals

The clock follows the host clock from the moment it is set. GPIO and sound
patterns advance one word per service tick. Inputs read low. The heap holds
16384 words, shared by all arrays.

## Errors

Scripts never stop with an error. A value that does not parse reads as
zero, a line out of range is ignored and a full table or stack keeps its
newest entry. Problems are logged as warnings.
*/
