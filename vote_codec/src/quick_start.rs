/*!

# Quick start

This example prints the payload of a ballot and reads it back, using the sample
election in the `tests/data` directory of the repository.

**Encoding a ballot** The votes of the voter are written in a JSON file, for example `votes.json`:

```text
{
  "president": ["bob"],
  "city-council": ["carol", {"writeIn": "Mickey Mouse"}],
  "prop-1": "yes"
}
```

The ballot style and the precinct are given directly, or with the activation code of the voter card:

```bash
bmdcodec encode --election tests/data/election_sample.json --activation-code VX.21.5 --votes votes.json
```

The program prints the content of the QR code:

```text
5.21.AbCoDE1pY2tleSBNb3VzZQ.Nn7Uq2vbB6CFrj3UbG0JvQ
```

The serial number (last field) is random and changes every time. Pass `--serial` to choose it.

**Decoding a ballot** The payload read by the scanner can be decoded with the same election:

```bash
bmdcodec decode --election tests/data/election_sample.json --payload 5.21.AbCoDE1pY2tleSBNb3VzZQ.Nn7Uq2vbB6CFrj3UbG0JvQ
```

The votes are printed in the same JSON format, and the ballot summary is logged:

```text
[INFO  bmdcodec::bmd] Ballot style 5, precinct 21, serial number Nn7Uq2vbB6CFrj3UbG0JvQ
[INFO  bmdcodec::bmd] President
[INFO  bmdcodec::bmd]     Bob Brown / People's
[INFO  bmdcodec::bmd] City Council
[INFO  bmdcodec::bmd]     Carol Chen
[INFO  bmdcodec::bmd]     Mickey Mouse (write-in)
[INFO  bmdcodec::bmd]     [no selection for 1 of 3 choices]
[INFO  bmdcodec::bmd] Proposition 1
[INFO  bmdcodec::bmd]     Yes on Prop 1
```

**Test decks** Before the election, print a test deck for every precinct and compare
it with a reference deck that was checked by hand:

```bash
bmdcodec test-deck --election tests/data/election_sample.json --out deck.json
bmdcodec test-deck --election tests/data/election_sample.json --precinct 21 \
  --reference tests/data/election_sample_deck_21.json
```

The `--format csv` option writes one line per selection instead of JSON.

See the [manual](../manual/index.html) for the layout of the encoded votes.

*/
